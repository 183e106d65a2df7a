use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
pub enum PromptError {
    #[error("{field} must be a valid number, got {input:?}")]
    NotANumber { field: &'static str, input: String },
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("no input for {field}")]
    Eof { field: &'static str },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    question: &str,
) -> Result<String, PromptError> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Eof { field });
    }
    Ok(line.trim().to_string())
}

/// Asks for the number of data points.
pub fn prompt_length<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<usize, PromptError> {
    let answer = read_answer(input, output, "length", "Number of data points (length): ")?;
    // Signed parse so that "-1" is reported as non-positive.
    let value: i64 = answer.parse().map_err(|_| PromptError::NotANumber {
        field: "length",
        input: answer.clone(),
    })?;
    if value <= 0 {
        return Err(PromptError::NotPositive { field: "length" });
    }
    usize::try_from(value).map_err(|_| PromptError::NotANumber {
        field: "length",
        input: answer,
    })
}

/// Asks for the spacing between consecutive abscissae.
pub fn prompt_step<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<f64, PromptError> {
    let answer = read_answer(input, output, "step", "Step (e.g. 0.01): ")?;
    let value: f64 = answer
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| PromptError::NotANumber {
            field: "step",
            input: answer.clone(),
        })?;
    if value <= 0.0 {
        return Err(PromptError::NotPositive { field: "step" });
    }
    Ok(value)
}
