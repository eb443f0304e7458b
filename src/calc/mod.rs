//! Calculator expression buffer.
//!
//! The buffer is a plain string of digits, `.`, and the four operators,
//! built one keypress at a time. Evaluation replaces the buffer with the
//! stringified result and remembers it so the next operator keypress can
//! chain off the previous answer.

pub mod eval;

pub use eval::CalcError;

/// Input beyond this many buffer characters is silently dropped.
const MAX_BUFFER_LEN: usize = 30;

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

#[derive(Debug, Default)]
pub struct CalcState {
    pub buffer: String,
    pub last_result: Option<f64>,
    pub error: Option<CalcError>,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text to show: the pending error, else the buffer, else `0`.
    pub fn display(&self) -> String {
        if let Some(err) = &self.error {
            return err.to_string();
        }
        if self.buffer.is_empty() {
            "0".to_string()
        } else {
            self.buffer.clone()
        }
    }

    /// The operand being typed: everything after the last operator.
    fn active_operand(&self) -> &str {
        match self.buffer.rfind(is_operator) {
            Some(i) => &self.buffer[i + 1..],
            None => &self.buffer,
        }
    }

    /// Append a digit or decimal point, subject to the operand rules: one
    /// leading zero on an empty buffer, at most one `.` per operand (a `.`
    /// starting an operand gets a zero prepended), and the length cap.
    pub fn append_digit(&mut self, digit: char) {
        self.error = None;
        if self.buffer.is_empty() && digit == '0' {
            self.buffer.push('0');
            return;
        }
        if digit == '.' {
            let operand = self.active_operand();
            if operand.contains('.') {
                return;
            }
            if operand.is_empty() {
                self.buffer.push('0');
            }
        }
        if self.buffer.len() >= MAX_BUFFER_LEN {
            return;
        }
        self.buffer.push(digit);
    }

    /// Append an operator. An empty buffer is first seeded with the last
    /// result when one exists; a trailing operator is replaced, not stacked.
    pub fn append_operator(&mut self, op: char) {
        self.error = None;
        if self.buffer.is_empty() {
            if let Some(result) = self.last_result {
                self.buffer = format_number(result);
            }
        }
        if self.buffer.ends_with(is_operator) {
            self.buffer.pop();
            self.buffer.push(op);
        } else if !self.buffer.is_empty() {
            self.buffer.push(op);
        }
    }

    /// Evaluate the buffer. A no-op when empty; on error the buffer and the
    /// last result are left untouched and the error becomes the display.
    pub fn evaluate(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        match eval::evaluate(&self.buffer) {
            Ok(value) => {
                self.error = None;
                self.last_result = Some(value);
                self.buffer = format_number(value);
            }
            Err(err) => self.error = Some(err),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_result = None;
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.buffer.pop();
    }
}

/// Format a result for the buffer: integers without a decimal point,
/// everything else with Rust's shortest round-trip representation.
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
