use crate::ast::Expr;
use std::fmt;

/// Walks the tree once and gathers the inventory for the report.
///
/// All accumulators live on this struct, so every call to [`analyze`] starts
/// from a clean slate and concurrent compiles cannot observe each other.
pub struct SemanticAnalyzer {
    node_count: usize,
    variables: Vec<String>,
    constants: Vec<String>,
    operators: Vec<String>,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            node_count: 0,
            variables: Vec::new(),
            constants: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Pre-order: operators are recorded before anything inside their
    /// operands, variables keep first-seen order, constants keep duplicates.
    fn visit(&mut self, expr: &Expr) {
        self.node_count += 1;
        match expr {
            Expr::Literal { value } => self.constants.push(value.clone()),
            Expr::Identifier { name } => {
                if !self.variables.contains(name) {
                    self.variables.push(name.clone());
                }
            }
            Expr::BinaryOperation {
                left,
                operation,
                right,
            } => {
                self.operators.push(operation.clone());
                self.visit(left);
                self.visit(right);
            }
            Expr::Negation { target } => {
                self.operators.push("unary -".to_string());
                self.visit(target);
            }
        }
    }
}

/// Describe the tree: what it contains and whether it could be evaluated
/// without runtime input. No arithmetic is performed.
pub fn analyze(root: &Expr) -> SemanticReport {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.visit(root);
    SemanticReport {
        node_count: analyzer.node_count,
        variables: analyzer.variables,
        constants: analyzer.constants,
        operators: analyzer.operators,
    }
}

#[derive(Debug, PartialEq)]
pub struct SemanticReport {
    pub node_count: usize,
    pub variables: Vec<String>,
    pub constants: Vec<String>,
    pub operators: Vec<String>,
}

impl SemanticReport {
    /// Symbolic means at least one variable occurs, so the expression cannot
    /// be evaluated at compile time.
    pub fn is_symbolic(&self) -> bool {
        !self.variables.is_empty()
    }
}

impl fmt::Display for SemanticReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Total nodes: {}", self.node_count)?;
        writeln!(f, "Variables: {}", list_or_none(&self.variables))?;
        writeln!(f, "Constants: {}", list_or_none(&self.constants))?;
        writeln!(f, "Operators: {}", list_or_none(&self.operators))?;
        if self.is_symbolic() {
            writeln!(f, "Classification: symbolic")?;
            write!(
                f,
                "Runtime values required for: {}",
                self.variables.join(", ")
            )
        } else {
            writeln!(f, "Classification: numeric")?;
            write!(f, "The expression is fully evaluable at compile time.")
        }
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
