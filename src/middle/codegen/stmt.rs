//! 语句代码生成

use crate::frontend::parser::Statement;

use super::{CodeGenerator, CodegenError};

impl CodeGenerator<'_> {
    /// Emit the host lines of one statement at the given nesting depth
    pub fn emit_statement(
        &mut self,
        stmt: &Statement,
        depth: usize,
        lines: &mut Vec<String>,
    ) -> Result<(), CodegenError> {
        let indent = self.options.indent.repeat(depth);
        match stmt {
            Statement::VarDecl(name) => {
                let var = self.symbols.resolve(name);
                lines.push(format!("{}{} = None", indent, var));
            }
            Statement::Assign(name, expr) => {
                let var = self.symbols.resolve(name).to_string();
                let value = self.render_expression(expr)?;
                lines.push(format!("{}{} = {}", indent, var, value));
            }
            Statement::IncBy(name, expr) => {
                let var = self.symbols.resolve(name).to_string();
                let value = self.render_expression(expr)?;
                lines.push(format!("{}{} += {}", indent, var, value));
            }
            Statement::DecBy(name, expr) => {
                let var = self.symbols.resolve(name).to_string();
                let value = self.render_expression(expr)?;
                lines.push(format!("{}{} -= {}", indent, var, value));
            }
            Statement::Say(expr) => {
                let value = self.render_expression(expr)?;
                lines.push(format!(
                    "{}{} += str({}) + \"\\n\"",
                    indent, self.options.output_var, value
                ));
            }
            Statement::Loop {
                var,
                from,
                to,
                body,
            } => {
                let var = self.symbols.resolve(var).to_string();
                let from = self.render_expression(from)?;
                let to = self.render_expression(to)?;
                lines.push(format!(
                    "{}for {} in range({}, {} + 1):",
                    indent, var, from, to
                ));
                for stmt in body {
                    self.emit_statement(stmt, depth + 1, lines)?;
                }
                if body.is_empty() {
                    lines.push(format!("{}{}pass", indent, self.options.indent));
                }
            }
        }
        Ok(())
    }
}
