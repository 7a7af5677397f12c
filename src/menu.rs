use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::data::model::{Catalog, CourseRecord};
use crate::report::render;

// ---------------------------------------------------------------------------
// Interactive menu
// ---------------------------------------------------------------------------

/// One menu entry as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    FullSchedule,
    BySubject,
    BySubjectAndCatalog,
    ByInstructor,
    Quit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::FullSchedule),
            "2" => Some(Choice::BySubject),
            "3" => Some(Choice::BySubjectAndCatalog),
            "4" => Some(Choice::ByInstructor),
            "5" => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Menu loop over a loaded catalog, reading answers from `input`.
pub struct Menu<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let catalog = self.catalog;
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompt("Enter your choice (1-5): ")? else {
                return Ok(());
            };

            let Some(choice) = Choice::parse(&answer) else {
                writeln!(self.output, "Invalid choice. Please enter a number from 1 to 5.")?;
                continue;
            };
            debug!("menu choice {choice:?}");

            match choice {
                Choice::FullSchedule => self.show(None)?,
                Choice::BySubject => {
                    let Some(subject) = self.prompt("Enter subject (e.g., BIO, MTH, PHY): ")? else {
                        return Ok(());
                    };
                    let found = catalog.find_by_subject(&subject);
                    self.show(Some(found.as_slice()))?;
                }
                Choice::BySubjectAndCatalog => {
                    let Some(subject) = self.prompt("Enter subject (e.g., BIO): ")? else {
                        return Ok(());
                    };
                    let Some(number) = self.prompt("Enter catalog number (e.g., 141): ")? else {
                        return Ok(());
                    };
                    let found = catalog.find_by_subject_and_catalog(&subject, &number);
                    self.show(Some(found.as_slice()))?;
                }
                Choice::ByInstructor => {
                    let Some(last_name) = self.prompt("Enter instructor last name: ")? else {
                        return Ok(());
                    };
                    let found = catalog.find_by_instructor_last_name(&last_name);
                    self.show(Some(found.as_slice()))?;
                }
                Choice::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        write!(
            self.output,
            "\nCourse Schedule System\n\
             1. Display full schedule\n\
             2. Search by subject\n\
             3. Search by subject and catalog number\n\
             4. Search by instructor last name\n\
             5. Quit\n"
        )?;
        Ok(())
    }

    /// Print `question` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading menu input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show(&mut self, records: Option<&[&CourseRecord]>) -> Result<()> {
        render(self.catalog, records, &mut self.output).context("writing schedule")
    }
}
