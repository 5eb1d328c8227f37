//! Host script executor

use std::collections::HashMap;

use super::ast::{AssignOp, BinOp, HostExpr, HostStmt};
use super::parser::parse_script;
use super::value::Value;
use crate::backends::{ExecutionState, Executor, ExecutorConfig, ExecutorError, ExecutorResult};

/// Tree-walking interpreter for host scripts
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Global variables
    env: HashMap<String, Value>,
    /// Execution state
    state: ExecutionState,
    /// Configuration
    config: ExecutorConfig,
}

impl Interpreter {
    /// Create a new interpreter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an interpreter with a custom configuration
    pub fn with_config(config: ExecutorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Value of a global after the last run
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&Value> {
        self.env.get(name)
    }

    fn exec_block(
        &mut self,
        stmts: &[HostStmt],
    ) -> ExecutorResult<()> {
        for stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(
        &mut self,
        stmt: &HostStmt,
    ) -> ExecutorResult<()> {
        self.state.statements_executed += 1;
        match stmt {
            HostStmt::Pass => Ok(()),
            HostStmt::Assign { name, op, value } => {
                let rhs = self.eval(value)?;
                let new_value = match op {
                    AssignOp::Set => rhs,
                    AssignOp::Add => self.lookup(name)?.binary(BinOp::Add, &rhs)?,
                    AssignOp::Sub => self.lookup(name)?.binary(BinOp::Sub, &rhs)?,
                };
                self.env.insert(name.clone(), new_value);
                Ok(())
            }
            HostStmt::For {
                var,
                start,
                end,
                body,
            } => {
                let start = self.eval_range_bound(start)?;
                let end = self.eval_range_bound(end)?;
                tracing::trace!("for {} in range({}, {})", var, start, end);
                for i in start..end {
                    self.env.insert(var.clone(), Value::Int(i));
                    self.exec_block(body)?;
                }
                Ok(())
            }
        }
    }

    fn eval_range_bound(
        &mut self,
        expr: &HostExpr,
    ) -> ExecutorResult<i64> {
        match self.eval(expr)? {
            Value::Int(n) => Ok(n),
            other => Err(ExecutorError::Type(format!(
                "range() argument must be int, not '{}'",
                other.type_name()
            ))),
        }
    }

    fn lookup(
        &self,
        name: &str,
    ) -> ExecutorResult<&Value> {
        self.env
            .get(name)
            .ok_or_else(|| ExecutorError::UndefinedName(name.to_string()))
    }

    fn eval(
        &mut self,
        expr: &HostExpr,
    ) -> ExecutorResult<Value> {
        match expr {
            HostExpr::Int(n) => Ok(Value::Int(*n)),
            HostExpr::Str(s) => Ok(Value::Str(s.clone())),
            HostExpr::None => Ok(Value::None),
            HostExpr::Name(name) => self.lookup(name).cloned(),
            HostExpr::Unary { op, expr } => self.eval(expr)?.unary(*op),
            HostExpr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                left.binary(*op, &right)
            }
            HostExpr::Call { func, args } => self.call(func, args),
        }
    }

    fn call(
        &mut self,
        func: &str,
        args: &[HostExpr],
    ) -> ExecutorResult<Value> {
        match (func, args) {
            ("str", [arg]) => Ok(Value::Str(self.eval(arg)?.to_string())),
            ("str", _) => Err(ExecutorError::Type(format!(
                "str() takes exactly one argument ({} given)",
                args.len()
            ))),
            _ => Err(ExecutorError::Type(format!("'{}' is not callable", func))),
        }
    }
}

impl Executor for Interpreter {
    fn execute(
        &mut self,
        source: &str,
    ) -> ExecutorResult<String> {
        self.reset();
        let program = parse_script(source)?;
        tracing::debug!("executing {} host statements", program.len());

        let output_var = self.config.output_var.clone();
        self.env
            .insert(output_var.clone(), Value::Str(String::new()));
        self.exec_block(&program)?;
        self.state.is_complete = true;

        match self.env.get(&output_var) {
            Some(Value::Str(output)) => Ok(output.clone()),
            _ => Err(ExecutorError::MissingAccumulator(output_var)),
        }
    }

    fn reset(&mut self) {
        self.env.clear();
        self.state = ExecutionState::default();
    }

    fn state(&self) -> &ExecutionState {
        &self.state
    }
}
