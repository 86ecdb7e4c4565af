//! Interactive four-function calculator.

use crate::console::prompt_line;
use anyhow::{bail, Result};
use gradebook_core::{parse_operand, Calculation};
use log::info;
use std::io::{BufRead, Write};

const DEFAULT_USER_NAME: &str = "User";

pub struct CalculatorSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CalculatorSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for a name and two numbers, then prints all four results.
    ///
    /// # Errors
    /// - Input ends before both numbers were read.
    /// - Console I/O fails.
    pub fn run(mut self) -> Result<Calculation> {
        writeln!(self.output, "Welcome to the Gradebook Calculator!\n")?;

        let name = match self.prompt("Enter your name: ")? {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_USER_NAME.to_string(),
        };

        writeln!(self.output, "\nPlease enter two numbers:")?;
        let lhs = self.read_operand("Enter first number: ")?;
        let rhs = self.read_operand("Enter second number: ")?;

        let calculation = Calculation::of(lhs, rhs);
        self.print_results(&name, &calculation)?;
        info!(
            "event=calc_done module=calculator status=ok divide_by_zero={}",
            calculation.quotient.is_none()
        );
        Ok(calculation)
    }

    fn read_operand(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                bail!("input closed before both numbers were entered");
            };
            match parse_operand(&line) {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }

    fn print_results(&mut self, name: &str, calc: &Calculation) -> Result<()> {
        writeln!(
            self.output,
            "\nHi {name}! You entered: {:.1} and {:.1}",
            calc.lhs, calc.rhs
        )?;
        writeln!(self.output, "Sum: {:.2}", calc.sum)?;
        writeln!(self.output, "Difference: {:.2}", calc.difference)?;
        writeln!(self.output, "Product: {:.2}", calc.product)?;
        match calc.quotient {
            Some(quotient) => writeln!(self.output, "Division: {quotient:.2}")?,
            None => writeln!(self.output, "Division: undefined (cannot divide by zero)")?,
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::CalculatorSession;
    use std::io::Cursor;

    fn run(script: &str) -> anyhow::Result<String> {
        let mut output = Vec::new();
        CalculatorSession::new(Cursor::new(script.to_string()), &mut output).run()?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn prints_all_four_results() {
        let out = run("Ada\n7\n2\n").unwrap();

        assert!(out.contains("Hi Ada! You entered: 7.0 and 2.0"));
        assert!(out.contains("Sum: 9.00"));
        assert!(out.contains("Difference: 5.00"));
        assert!(out.contains("Product: 14.00"));
        assert!(out.contains("Division: 3.50"));
    }

    #[test]
    fn blank_name_defaults_and_zero_divisor_is_undefined() {
        let out = run("\n4\n0\n").unwrap();

        assert!(out.contains("Hi User!"));
        assert!(out.contains("Division: undefined (cannot divide by zero)"));
    }

    #[test]
    fn reprompts_until_number_is_valid() {
        let out = run("Ada\nfour\n4\nx\n1\n").unwrap();

        assert_eq!(out.matches("Invalid input. Please enter a number.").count(), 2);
        assert!(out.contains("Sum: 5.00"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let err = run("Ada\n3\n").unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
