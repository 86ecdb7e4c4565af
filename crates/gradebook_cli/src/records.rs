//! Interactive student record session.
//!
//! # Responsibility
//! - Translate console lines into record store calls and print the results.
//! - Print the final class report when the session ends.
//!
//! # Invariants
//! - Bad input prints a message and re-prompts; it never ends the session.
//! - End of input behaves like `exit`.

use crate::console::prompt_line;
use anyhow::{Context, Result};
use gradebook_core::{
    parse_command, parse_entry, ClassReport, Command, MenuChoice, RecordStore, StudentRecord,
};
use log::info;
use std::io::{BufRead, Write};

const ENTRY_PROMPT: &str = "\nEnter student record or command: ";
const MENU_PROMPT: &str = "Enter your choice (1-6): ";
const NO_RECORDS: &str = "No student records available.";

/// Output style for the end-of-session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

enum MenuOutcome {
    Back,
    InputClosed,
}

pub struct RecordSession<R, W> {
    input: R,
    output: W,
    store: RecordStore,
}

impl<R: BufRead, W: Write> RecordSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            store: RecordStore::new(),
        }
    }

    /// Runs until `exit` or end of input, then prints the class report.
    ///
    /// Returns the final store value.
    pub fn run(mut self, format: ReportFormat) -> Result<RecordStore> {
        writeln!(self.output, "Welcome to Student Record Manager!")?;
        writeln!(self.output, "Enter student records in format: 'Name, Grade'")?;
        writeln!(
            self.output,
            "Type 'menu' to access other options or 'exit' to quit"
        )?;

        while let Some(line) = self.prompt(ENTRY_PROMPT)? {
            match parse_command(&line) {
                Command::Exit => break,
                Command::Menu => {
                    if let MenuOutcome::InputClosed = self.run_menu()? {
                        break;
                    }
                }
                Command::Entry(text) => match parse_entry(text) {
                    Some((name, grade)) => self.add_student(name, grade)?,
                    None => writeln!(
                        self.output,
                        "Invalid input format. Use 'Name, Grade' or type 'menu' for options"
                    )?,
                },
            }
        }

        info!(
            "event=session_end module=records status=ok total={}",
            self.store.len()
        );
        self.print_report(format)?;
        Ok(self.store)
    }

    fn run_menu(&mut self) -> Result<MenuOutcome> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt(MENU_PROMPT)? else {
                return Ok(MenuOutcome::InputClosed);
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddStudent) => {
                    let Some(entry) = self.prompt("Enter student (Name, Grade): ")? else {
                        return Ok(MenuOutcome::InputClosed);
                    };
                    match parse_entry(&entry) {
                        Some((name, grade)) => self.add_student(name, grade)?,
                        None => writeln!(self.output, "Invalid input format. Use 'Name, Grade'")?,
                    }
                }
                Some(MenuChoice::ViewAll) => {
                    let students = self.store.list_all();
                    if students.is_empty() {
                        writeln!(self.output, "{NO_RECORDS}")?;
                    } else {
                        writeln!(self.output, "\nAll Students:")?;
                        self.print_records(&students, "")?;
                    }
                }
                Some(MenuChoice::TopStudent) => match self.store.top_student() {
                    Some(top) => writeln!(
                        self.output,
                        "\nTop Student: {} with grade {}",
                        top.name(),
                        top.grade()
                    )?,
                    None => writeln!(self.output, "{NO_RECORDS}")?,
                },
                Some(MenuChoice::Filter) => {
                    let Some(raw) = self.prompt("Enter minimum grade: ")? else {
                        return Ok(MenuOutcome::InputClosed);
                    };
                    let filtered = self.store.filter(&raw);
                    if filtered.is_empty() {
                        writeln!(
                            self.output,
                            "No students meet this grade threshold or invalid input."
                        )?;
                    } else {
                        writeln!(self.output, "\nStudents with grade ≥ {}:", raw.trim())?;
                        self.print_records(&filtered, "")?;
                    }
                }
                Some(MenuChoice::Statistics) => {
                    let stats = self.store.statistics();
                    writeln!(self.output, "\nClass Statistics:")?;
                    writeln!(self.output, "Total students: {}", stats.total_students)?;
                    writeln!(
                        self.output,
                        "Average grade: {}",
                        format_average(stats.total_students, stats.average)
                    )?;
                    writeln!(
                        self.output,
                        "Students above average: {}",
                        stats.above_average_count
                    )?;
                    if !stats.above_average_students.is_empty() {
                        writeln!(self.output, "Above average students:")?;
                        self.print_records(&stats.above_average_students, "- ")?;
                    }
                }
                Some(MenuChoice::Back) => {
                    writeln!(self.output, "Returning to main input...")?;
                    return Ok(MenuOutcome::Back);
                }
                None => writeln!(self.output, "Invalid choice. Please enter 1-6.")?,
            }
        }
    }

    fn add_student(&mut self, name: &str, grade: &str) -> Result<()> {
        match self.store.insert(name, grade) {
            Ok(store) => {
                self.store = store;
                writeln!(self.output, "Student '{name}' added successfully.")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nStudent Record Manager Menu:")?;
        writeln!(self.output, "1. Add a new student")?;
        writeln!(self.output, "2. View all students")?;
        writeln!(self.output, "3. View top student")?;
        writeln!(self.output, "4. Filter students by minimum grade")?;
        writeln!(self.output, "5. View class statistics")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn print_records(&mut self, records: &[StudentRecord], bullet: &str) -> Result<()> {
        for record in records {
            writeln!(self.output, "{bullet}{record}")?;
        }
        Ok(())
    }

    fn print_report(&mut self, format: ReportFormat) -> Result<()> {
        let report = ClassReport::build(&self.store);

        if format == ReportFormat::Json {
            let json = serde_json::to_string_pretty(&report)
                .context("failed to serialize class report")?;
            writeln!(self.output, "{json}")?;
            return Ok(());
        }

        writeln!(self.output, "\nFinal Class Report:")?;
        let Some(top) = report.top_student.as_ref() else {
            writeln!(self.output, "No student records entered.")?;
            return Ok(());
        };

        writeln!(
            self.output,
            "\nTotal Students: {}",
            report.statistics.total_students
        )?;
        writeln!(self.output, "Average Grade: {:?}", report.statistics.average)?;
        writeln!(self.output, "\nTop Student: {} - {}", top.name(), top.grade())?;
        writeln!(self.output, "\nAll Students (alphabetical order):")?;
        self.print_records(&report.students, "")?;
        writeln!(self.output, "\nStudents Above Average:")?;
        self.print_records(&report.statistics.above_average_students, "")?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }
}

/// An empty class shows a bare `0`; otherwise keep the float form (`80.0`).
fn format_average(total_students: usize, average: f64) -> String {
    if total_students == 0 {
        "0".to_string()
    } else {
        format!("{average:?}")
    }
}
