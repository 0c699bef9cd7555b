//! Lexical modes and the stack that tracks their nesting.

/// Brace depth inside one `${ ... }` interpolation.
///
/// Starts at 1 when the hole opens; the hole closes when it returns to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateExpressionFrame {
    pub depth: u32,
}

impl TemplateExpressionFrame {
    fn opened() -> Self {
        Self { depth: 1 }
    }

    /// Record a `{` inside the hole.
    pub fn open_brace(&mut self) {
        self.depth += 1;
    }

    /// Record a `}` inside the hole. Returns `true` when this brace closes
    /// the hole itself.
    pub fn close_brace(&mut self) -> bool {
        self.depth = self.depth.saturating_sub(1);
        self.depth == 0
    }
}

/// What the scanner is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Code,
    SingleQuote,
    DoubleQuote,
    Template,
    TemplateHole(TemplateExpressionFrame),
    LineComment,
    BlockComment,
}

impl ScanMode {
    /// The mode opened by the delimiter at the start of `rest`, with the
    /// delimiter's byte length. Only meaningful in code-like modes.
    pub fn opened_by(rest: &str) -> Option<(ScanMode, usize)> {
        let opened = match rest.as_bytes() {
            [b'"', ..] => (ScanMode::DoubleQuote, 1),
            [b'\'', ..] => (ScanMode::SingleQuote, 1),
            [b'`', ..] => (ScanMode::Template, 1),
            [b'/', b'/', ..] => (ScanMode::LineComment, 2),
            [b'/', b'*', ..] => (ScanMode::BlockComment, 2),
            _ => return None,
        };
        Some(opened)
    }

    /// The mode pushed when a template literal starts an interpolation.
    pub fn template_hole() -> Self {
        ScanMode::TemplateHole(TemplateExpressionFrame::opened())
    }

    /// Whether keyword substitution applies in this mode.
    pub fn is_code_like(self) -> bool {
        matches!(self, ScanMode::Code | ScanMode::TemplateHole(_))
    }
}

/// Stack of lexical modes. The bottom frame is always [`ScanMode::Code`]
/// and is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack {
    frames: Vec<ScanMode>,
}

impl Default for ModeStack {
    fn default() -> Self {
        Self {
            frames: vec![ScanMode::Code],
        }
    }
}

impl ModeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScanMode {
        self.frames.last().copied().unwrap_or(ScanMode::Code)
    }

    pub fn push(&mut self, mode: ScanMode) {
        self.frames.push(mode);
    }

    /// Pop the innermost mode. The bottom `Code` frame stays put.
    pub fn pop(&mut self) -> Option<ScanMode> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Number of frames, including the bottom `Code` frame.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The innermost frame's interpolation state, if it is a template hole.
    pub fn template_hole_mut(&mut self) -> Option<&mut TemplateExpressionFrame> {
        match self.frames.last_mut() {
            Some(ScanMode::TemplateHole(frame)) => Some(frame),
            _ => None,
        }
    }
}
