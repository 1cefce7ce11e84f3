pub mod codec_ops;
pub mod config_ops;

use serde::Serialize;

/// Result of one encode or decode request, as printed by `romantool`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    fn from_result<T: ToString>(input: &str, result: roman_core::Result<T>) -> Self {
        match result {
            Ok(v) => Self {
                input: input.to_string(),
                output: Some(v.to_string()),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                output: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// One line of human-readable output.
    pub fn render_text(&self) -> String {
        match (&self.output, &self.error) {
            (Some(out), _) if out.is_empty() => format!("{} => \"\"", self.input),
            (Some(out), _) => format!("{} => {}", self.input, out),
            (None, Some(err)) => format!("{} => Error: {}", self.input, err),
            (None, None) => format!("{} =>", self.input),
        }
    }
}

/// Print outcomes as text or JSON lines. Returns false if any failed.
pub fn print_outcomes(outcomes: &[Outcome], json: bool) -> bool {
    for o in outcomes {
        if json {
            match serde_json::to_string(o) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("Error: {e}"),
            }
        } else if o.is_ok() {
            println!("{}", o.render_text());
        } else {
            eprintln!("{}", o.render_text());
        }
    }
    outcomes.iter().all(Outcome::is_ok)
}
