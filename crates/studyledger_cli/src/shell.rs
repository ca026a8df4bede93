//! Interactive numbered-menu shell over the session ledger.
//!
//! # Responsibility
//! - Collect free-text input and translate it into ledger calls.
//! - Render ledger results as plain text.
//!
//! # Invariants
//! - Holds no domain state of its own; every answer comes from the ledger.
//! - Ledger errors and malformed input are reported and the loop continues.
//! - End of input behaves like choosing "Exit".

use crate::input::LineSource;
use log::debug;
use std::io::{self, Write};
use studyledger_core::{
    format_duration, format_wall_time, Clock, SessionId, SessionLedger, SessionRepository, Subject,
};

const MENU: &str = "
Options:
1. Start a new study session
2. End a study session
3. View active sessions
4. View completed sessions
5. View study statistics
6. Exit";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    End,
    ViewActive,
    ViewCompleted,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Parses a menu answer; `None` for anything outside `1..=6`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Start),
            "2" => Some(Self::End),
            "3" => Some(Self::ViewActive),
            "4" => Some(Self::ViewCompleted),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Menu loop bound to one ledger, one input source and one output sink.
pub struct Shell<'a, R: SessionRepository, C: Clock, L: LineSource, W: Write> {
    ledger: &'a mut SessionLedger<R, C>,
    input: L,
    out: W,
}

impl<'a, R: SessionRepository, C: Clock, L: LineSource, W: Write> Shell<'a, R, C, L, W> {
    pub fn new(ledger: &'a mut SessionLedger<R, C>, input: L, out: W) -> Self {
        Self { ledger, input, out }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// # Errors
    /// - I/O failures from the input source or the output sink.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Study Session Manager!")?;
        writeln!(self.out, "=================================")?;

        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(answer) = self.prompt("\nEnter your choice (1-6): ")? else {
                return self.goodbye();
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(choice) => {
                    debug!("event=menu_choice module=shell choice={choice:?}");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return self.goodbye();
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Start => self.start_session(),
            MenuChoice::End => self.end_session(),
            MenuChoice::ViewActive => self.view_active().map(|()| Flow::Continue),
            MenuChoice::ViewCompleted => self.view_completed().map(|()| Flow::Continue),
            MenuChoice::Statistics => self.view_statistics().map(|()| Flow::Continue),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn start_session(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("\nEnter subject name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Enter subject description: ")? else {
            return Ok(Flow::Exit);
        };

        let session = self.ledger.start_session(Subject::new(name, description));
        writeln!(
            self.out,
            "Started study session #{} for {} at {}",
            session.id,
            session.subject.name,
            format_wall_time(session.start_time)
        )?;
        Ok(Flow::Continue)
    }

    fn end_session(&mut self) -> io::Result<Flow> {
        let active = self.ledger.get_active_sessions();
        if active.is_empty() {
            writeln!(self.out, "No active sessions to end.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\nActive sessions:")?;
        for session in &active {
            writeln!(
                self.out,
                "#{} - {} (started at {})",
                session.id,
                session.subject.name,
                format_wall_time(session.start_time)
            )?;
        }

        let Some(raw_id) = self.prompt("\nEnter session ID to end: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(id) = raw_id.parse::<SessionId>() else {
            writeln!(self.out, "Invalid ID. Please enter a number.")?;
            return Ok(Flow::Continue);
        };
        let Some(notes) = self.prompt("Enter session notes: ")? else {
            return Ok(Flow::Exit);
        };

        if let Err(err) = self.ledger.end_session(id, notes) {
            writeln!(self.out, "Error ending session: {err}")?;
            return Ok(Flow::Continue);
        }

        match self.ledger.get_session_by_id(id) {
            Ok(session) => writeln!(
                self.out,
                "Ended study session #{} for {}. Duration: {}",
                id,
                session.subject.name,
                format_duration(session.duration)
            )?,
            Err(err) => writeln!(self.out, "Error ending session: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn view_active(&mut self) -> io::Result<()> {
        let sessions = self.ledger.get_active_sessions();
        if sessions.is_empty() {
            return writeln!(self.out, "\nNo active study sessions.");
        }

        writeln!(self.out, "\nActive study sessions:")?;
        writeln!(self.out, "---------------------")?;
        for session in &sessions {
            writeln!(self.out, "#{} - {}", session.id, session.subject.name)?;
            writeln!(
                self.out,
                "    Started: {}",
                format_wall_time(session.start_time)
            )?;
            writeln!(
                self.out,
                "    Running for: {}",
                format_duration(self.ledger.elapsed(session))
            )?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn view_completed(&mut self) -> io::Result<()> {
        let sessions = self.ledger.get_completed_sessions();
        if sessions.is_empty() {
            return writeln!(self.out, "\nNo completed study sessions.");
        }

        writeln!(self.out, "\nCompleted study sessions:")?;
        writeln!(self.out, "------------------------")?;
        for session in &sessions {
            writeln!(self.out, "#{} - {}", session.id, session.subject.name)?;
            writeln!(self.out, "    Duration: {}", format_duration(session.duration))?;
            writeln!(self.out, "    Notes: {}", session.notes)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn view_statistics(&mut self) -> io::Result<()> {
        let stats = self.ledger.statistics();

        writeln!(self.out, "\nStudy Statistics:")?;
        writeln!(self.out, "----------------")?;
        writeln!(
            self.out,
            "Total study time: {}",
            format_duration(stats.total_study_time)
        )?;
        writeln!(
            self.out,
            "Sessions: {} active, {} completed",
            stats.active_sessions, stats.completed_sessions
        )?;

        writeln!(self.out, "\nTime by subject:")?;
        for subject in &stats.by_subject {
            writeln!(
                self.out,
                "- {}: {}",
                subject.subject_name,
                format_duration(subject.total)
            )?;
        }
        Ok(())
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Thank you for using Study Session Manager. Goodbye!"
        )?;
        self.out.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.out.flush()?;
        Ok(self
            .input
            .read_line(text)?
            .map(|line| line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, Shell};
    use crate::input::ScriptedInput;
    use chrono::{Local, TimeZone, Utc};
    use std::time::Duration;
    use studyledger_core::{ManualClock, SessionLedger, Subject};

    fn clock() -> ManualClock {
        ManualClock::new(
            Utc.with_ymd_and_hms(2026, 9, 14, 16, 0, 0)
                .unwrap()
                .with_timezone(&Local),
        )
    }

    fn run_script<R, C>(ledger: &mut SessionLedger<R, C>, lines: &[&str]) -> String
    where
        R: studyledger_core::SessionRepository,
        C: studyledger_core::Clock,
    {
        let mut out = Vec::new();
        Shell::new(ledger, ScriptedInput::new(lines.iter().copied()), &mut out)
            .run()
            .expect("scripted run should not fail");
        String::from_utf8(out).expect("shell output should be UTF-8")
    }

    #[test]
    fn menu_choice_parses_only_known_options() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Start));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("start"), None);
    }

    #[test]
    fn start_then_exit_reports_started_session() {
        let mut ledger = SessionLedger::with_clock(clock());
        let output = run_script(&mut ledger, &["1", "  Math ", "algebra", "6"]);

        assert!(output.contains("Started study session #1 for Math at "));
        assert!(output.ends_with("Thank you for using Study Session Manager. Goodbye!\n"));
        assert_eq!(ledger.get_active_sessions()[0].subject.name, "Math");
    }

    #[test]
    fn end_session_flow_prints_duration() {
        let clock = clock();
        let mut ledger = SessionLedger::with_clock(clock.clone());
        ledger.start_session(Subject::new("Physics", ""));
        clock.advance(Duration::from_secs(3725));

        let output = run_script(&mut ledger, &["2", "1", "optics review", "4", "6"]);

        assert!(output.contains("Ended study session #1 for Physics. Duration: 1h 2m 5s"));
        assert!(output.contains("    Notes: optics review"));
        assert!(ledger.get_active_sessions().is_empty());
    }

    #[test]
    fn end_session_reports_bad_input_and_missing_ids() {
        let mut ledger = SessionLedger::with_clock(clock());
        let output = run_script(&mut ledger, &["2", "3"]);
        assert!(output.contains("No active sessions to end."));

        ledger.start_session(Subject::new("Math", ""));
        let output = run_script(&mut ledger, &["2", "abc", "2", "9", "notes", "6"]);
        assert!(output.contains("Invalid ID. Please enter a number."));
        assert!(output.contains(
            "Error ending session: session with ID 9 not found or already completed"
        ));
        assert_eq!(ledger.get_active_sessions().len(), 1);
    }

    #[test]
    fn views_and_statistics_render_ledger_state() {
        let clock = clock();
        let mut ledger = SessionLedger::with_clock(clock.clone());
        let math = ledger.start_session(Subject::new("Math", ""));
        ledger.start_session(Subject::new("Art", ""));
        clock.advance(Duration::from_secs(95));
        ledger.end_session(math.id, "").unwrap();
        clock.advance(Duration::from_secs(10));

        let output = run_script(&mut ledger, &["3", "5"]);

        assert!(output.contains("#2 - Art"));
        assert!(output.contains("    Running for: 1m 45s"));
        assert!(output.contains("Total study time: 1m 35s"));
        assert!(output.contains("- Math: 1m 35s"));
        assert!(!output.contains("- Art:"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn empty_views_and_invalid_choice_keep_looping() {
        let mut ledger = SessionLedger::with_clock(clock());
        let output = run_script(&mut ledger, &["3", "4", "banana", "6"]);

        assert!(output.contains("No active study sessions."));
        assert!(output.contains("No completed study sessions."));
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(ledger.is_empty());
    }
}
