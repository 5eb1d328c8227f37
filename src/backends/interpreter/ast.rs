//! Host script syntax tree

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Pos,
}

/// Host expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostExpr {
    Int(i64),
    Str(String),
    None,
    Name(String),
    Unary {
        op: UnOp,
        expr: Box<HostExpr>,
    },
    Binary {
        op: BinOp,
        left: Box<HostExpr>,
        right: Box<HostExpr>,
    },
    Call {
        func: String,
        args: Vec<HostExpr>,
    },
}

/// Assignment flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Set,
    /// `+=`
    Add,
    /// `-=`
    Sub,
}

/// Host statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStmt {
    Assign {
        name: String,
        op: AssignOp,
        value: HostExpr,
    },
    /// `for var in range(start, end):`, end exclusive
    For {
        var: String,
        start: HostExpr,
        end: HostExpr,
        body: Vec<HostStmt>,
    },
    Pass,
}
