use crate::ast::Expr;

/// Render the syntax tree as indented text, one node per line.
///
/// Operators print before their children, left subtree before right, so the
/// output reads top-down in evaluation-independent structural order.
pub fn print_tree(root: &Expr) -> String {
    let mut printer = TreePrinter {
        indent: 0,
        out: String::new(),
    };
    printer.print_expr(root);
    printer.out
}

struct TreePrinter {
    indent: usize,
    out: String,
}

impl TreePrinter {
    fn line(&mut self, text: &str) {
        self.out.push_str(&"  ".repeat(self.indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indented<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal { value } => self.line(&format!("Number: {value}")),
            Expr::Identifier { name } => self.line(&format!("Variable: {name}")),
            Expr::BinaryOperation {
                left,
                operation,
                right,
            } => {
                self.line(&format!("BinaryOp: {operation}"));
                self.indented(|printer| {
                    printer.print_expr(left);
                    printer.print_expr(right);
                });
            }
            Expr::Negation { target } => {
                self.line("UnaryOp: -");
                self.indented(|printer| printer.print_expr(target));
            }
        }
    }
}
