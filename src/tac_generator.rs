use crate::ast::Expr;
use crate::tac::Instruction;

pub struct TacGenerator {
    temp_number: u32,
    instructions: Vec<Instruction>,
}

impl Default for TacGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TacGenerator {
    pub fn new() -> Self {
        Self {
            temp_number: 0,
            instructions: Vec::new(),
        }
    }

    fn new_temp(&mut self) -> String {
        let name = format!("t{}", self.temp_number);
        self.temp_number += 1;
        name
    }

    fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Post-order generation. Leaves contribute their text as an operand
    /// without emitting anything; inner nodes emit into a fresh temporary
    /// and return its name. The left operand is generated before the right,
    /// which is observable in the temporary numbering.
    fn visit(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Literal { value } => value.clone(),
            Expr::Identifier { name } => name.clone(),
            Expr::Negation { target } => {
                let operand = self.visit(target);
                let dest = self.new_temp();
                self.emit(Instruction::Negate {
                    dest: dest.clone(),
                    operand,
                });
                dest
            }
            Expr::BinaryOperation {
                left,
                operation,
                right,
            } => {
                let left_ref = self.visit(left);
                let right_ref = self.visit(right);
                let dest = self.new_temp();
                self.emit(Instruction::Binary {
                    dest: dest.clone(),
                    left: left_ref,
                    operation: operation.clone(),
                    right: right_ref,
                });
                dest
            }
        }
    }
}

/// Generate the instruction sequence for one expression.
///
/// The temporary counter lives inside the generator, so numbering restarts
/// at `t0` on every call. A final `result = <root>` copy is always appended,
/// guaranteeing at least one instruction even for a bare literal.
pub fn generate_tac(root: &Expr) -> Vec<Instruction> {
    let mut generator = TacGenerator::new();
    let root_ref = generator.visit(root);
    generator.emit(Instruction::Copy {
        dest: "result".to_string(),
        source: root_ref,
    });
    generator.instructions
}
