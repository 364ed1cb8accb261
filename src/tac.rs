use std::fmt;

/// One three-address instruction. Each assigns to a named destination and
/// carries at most one operator.
pub enum Instruction {
    Binary {
        dest: String,
        left: String,
        operation: String,
        right: String,
    },
    Negate {
        dest: String,
        operand: String,
    },
    Copy {
        dest: String,
        source: String,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Binary {
                dest,
                left,
                operation,
                right,
            } => write!(f, "{dest} = {left} {operation} {right}"),
            Self::Negate { dest, operand } => write!(f, "{dest} = -{operand}"),
            Self::Copy { dest, source } => write!(f, "{dest} = {source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(
            Instruction::Binary {
                dest: "t1".to_string(),
                left: "2".to_string(),
                operation: "+".to_string(),
                right: "t0".to_string(),
            }
            .to_string(),
            "t1 = 2 + t0"
        );
        assert_eq!(
            Instruction::Negate {
                dest: "t0".to_string(),
                operand: "x".to_string(),
            }
            .to_string(),
            "t0 = -x"
        );
        assert_eq!(
            Instruction::Copy {
                dest: "result".to_string(),
                source: "t1".to_string(),
            }
            .to_string(),
            "result = t1"
        );
    }
}
