//! Indentation tracking for the offside lexer
//!
//! Implements Python-style INDENT/DEDENT decisions over a stack of open widths. Widths are raw character counts of
//! the leading space/tab run; a tab counts as one, the same as a space.

/// Decision for one line-initial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentChange {
    /// Same width as the innermost open block.
    Unchanged,
    /// A deeper block opened: emit one INDENT.
    Indent,
    /// This many blocks closed: emit one DEDENT each.
    Dedent(usize),
}

/// The width of a line does not match any open block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentMismatch {
    pub width: usize,
    /// Open widths at the time of the mismatch, outermost first.
    pub open: Vec<usize>,
}

/// Stack of open indentation widths.
///
/// ## Notes
/// - The bottom entry is always `0`, and entries strictly increase towards the top.
/// - The stack is only ever emptied by [`IndentStack::drain`] at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<usize>,
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentStack {
    pub fn new() -> Self {
        Self { levels: vec![0] }
    }

    /// Width of the innermost open block.
    pub fn top(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Number of blocks opened above the sentinel.
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Apply the width of a line that starts a real statement.
    ///
    /// A width greater than the top pushes one level. Otherwise levels are popped until the top equals `width`.
    /// When no open level equals `width` the stack is left untouched and the mismatch is returned, so a failing
    /// line never produces a partial run of dedents.
    pub fn resolve(&mut self, width: usize) -> Result<IndentChange, IndentMismatch> {
        let top = self.top();
        if width > top {
            self.levels.push(width);
            return Ok(IndentChange::Indent);
        }
        if width == top {
            return Ok(IndentChange::Unchanged);
        }

        let Some(target) = self.levels.iter().rposition(|&level| level == width) else {
            return Err(IndentMismatch {
                width,
                open: self.levels.clone(),
            });
        };
        let closed = self.levels.len() - 1 - target;
        self.levels.truncate(target + 1);
        Ok(IndentChange::Dedent(closed))
    }

    /// Pop every level above the sentinel, returning how many DEDENTs that takes. Never fails.
    pub fn drain(&mut self) -> usize {
        let closed = self.depth();
        self.levels.truncate(1);
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel() {
        let stack = IndentStack::new();
        assert_eq!(stack.levels(), &[0]);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn zero_width_line_at_top_level_is_unchanged() {
        let mut stack = IndentStack::new();
        assert_eq!(stack.resolve(0), Ok(IndentChange::Unchanged));
        assert_eq!(stack.levels(), &[0]);
    }

    #[test]
    fn indent_then_same_width() {
        let mut stack = IndentStack::new();
        assert_eq!(stack.resolve(4), Ok(IndentChange::Indent));
        assert_eq!(stack.resolve(4), Ok(IndentChange::Unchanged));
        assert_eq!(stack.levels(), &[0, 4]);
    }

    #[test]
    fn dedent_several_levels_at_once() {
        let mut stack = IndentStack::new();
        stack.resolve(2).unwrap();
        stack.resolve(4).unwrap();
        stack.resolve(8).unwrap();
        assert_eq!(stack.resolve(2), Ok(IndentChange::Dedent(2)));
        assert_eq!(stack.levels(), &[0, 2]);
        assert_eq!(stack.resolve(0), Ok(IndentChange::Dedent(1)));
    }

    #[test]
    fn dedent_to_unknown_width_is_a_mismatch() {
        let mut stack = IndentStack::new();
        stack.resolve(4).unwrap();
        let err = stack.resolve(2).unwrap_err();
        assert_eq!(err.width, 2);
        assert_eq!(err.open, vec![0, 4]);
        // Nothing was popped.
        assert_eq!(stack.levels(), &[0, 4]);
    }

    #[test]
    fn tabs_and_spaces_are_plain_counts() {
        // A tab-indented line (width 1) after a 4-space block has no matching level.
        let mut stack = IndentStack::new();
        stack.resolve(4).unwrap();
        assert!(stack.resolve(1).is_err());
    }

    #[test]
    fn drain_closes_everything_without_error() {
        let mut stack = IndentStack::new();
        stack.resolve(1).unwrap();
        stack.resolve(3).unwrap();
        stack.resolve(6).unwrap();
        assert_eq!(stack.drain(), 3);
        assert_eq!(stack.levels(), &[0]);
        assert_eq!(stack.drain(), 0);
    }
}
