/// Lower rendered TAC lines into pseudo-assembly.
///
/// Every `target = expr` line becomes `MOV target, expr`, splitting on the
/// first `" = "` only. Lines without an assignment are dropped. A
/// single-line TAC program means the expression folded to one value with no
/// operations, which gets a placeholder instead of a lone MOV.
pub fn emit(tac_lines: &[String]) -> String {
    if let [only] = tac_lines {
        let value = only
            .split_once(" = ")
            .map_or(only.as_str(), |(_, value)| value);
        return format!("The expression is a single value ({value}); no operations to emit.");
    }

    let mut lines: Vec<String> = Vec::new();
    for line in tac_lines {
        if let Some((target, expression)) = line.split_once(" = ") {
            lines.push(format!("MOV {target}, {expression}"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_mov_translation() {
        assert_eq!(
            emit(&lines(&["t0 = 3 * 4", "t1 = 2 + t0", "result = t1"])),
            "MOV t0, 3 * 4\nMOV t1, 2 + t0\nMOV result, t1"
        );
    }

    #[test]
    fn test_single_value_placeholder() {
        assert_eq!(
            emit(&lines(&["result = 5"])),
            "The expression is a single value (5); no operations to emit."
        );
    }

    #[test]
    fn test_splits_on_first_assignment_only() {
        // The right-hand side may itself contain " = "-free operators, but a
        // copy of a temporary must keep its full expression text.
        assert_eq!(
            emit(&lines(&["t0 = a / b", "result = t0"])),
            "MOV t0, a / b\nMOV result, t0"
        );
    }

    #[test]
    fn test_non_assignment_lines_are_dropped() {
        assert_eq!(
            emit(&lines(&["t0 = 1 + 2", "garbage", "result = t0"])),
            "MOV t0, 1 + 2\nMOV result, t0"
        );
    }
}
