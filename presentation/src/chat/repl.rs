//! REPL (Read-Eval-Print Loop) for a tutoring conversation

use super::command::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ThinkingSpinner;
use leetbud_application::{ConversationSession, Resolution, ResolveError, ResolveProblemUseCase};
use leetbud_domain::{ProblemRecord, TutorPrompt};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::future::Future;
use std::io::IsTerminal;
use tracing::{debug, warn};

const GOODBYE: &str = "Goodbye! Happy coding!";

/// Whether the REPL keeps reading after a command
enum Flow {
    Continue,
    Exit,
}

/// Interactive tutoring REPL
///
/// Asks for a problem until one resolves, then relays each line typed at
/// `[You]:` to the conversation session and prints the reply in a box.
pub struct TutorRepl {
    resolver: ResolveProblemUseCase,
    session: ConversationSession,
    formatter: ConsoleFormatter,
    config: ReplConfig,
    problem: Option<ProblemRecord>,
}

impl TutorRepl {
    pub fn new(
        resolver: ResolveProblemUseCase,
        session: ConversationSession,
        formatter: ConsoleFormatter,
    ) -> Self {
        Self {
            resolver,
            session,
            formatter,
            config: ReplConfig::default(),
            problem: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Problem currently being discussed
    pub fn problem(&self) -> Option<&ProblemRecord> {
        self.problem.as_ref()
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Run the interactive REPL, starting with `initial_query` if given
    pub async fn run(&mut self, initial_query: Option<String>) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if let Some(record) = self.ask_for_problem(&mut rl, initial_query).await {
            self.start_problem(record);
            self.conversation_loop(&mut rl).await;
        }

        println!("\n{}", GOODBYE);

        if let Some(ref path) = history_path {
            if let Err(e) = rl.save_history(path) {
                warn!("Failed to save history to {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("Welcome to LeetBud!");
        println!("I'm your study buddy. I can help you solve coding problems step by step.");
        println!();
        println!("What problem would you like help with today?");
        println!("Enter problem name or number (Ctrl-D to quit)");
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?        - Show this help");
        println!("  /problem, /p         - Show the current problem");
        println!("  /new [query]         - Switch to another problem");
        println!("  /reset               - Start this problem's conversation over");
        println!("  /history             - Show how much of the conversation is kept");
        println!("  exit, quit, /quit, /q - Exit");
        println!();
    }

    /// Prompt until a query resolves. `None` when input ends.
    async fn ask_for_problem(
        &self,
        rl: &mut DefaultEditor,
        mut pending: Option<String>,
    ) -> Option<ProblemRecord> {
        loop {
            let input = match pending.take() {
                Some(query) => query,
                None => match rl.readline("[Problem ID/Name]: ") {
                    Ok(line) => line,
                    Err(ReadlineError::Interrupted) => continue,
                    Err(ReadlineError::Eof) => return None,
                    Err(err) => {
                        eprintln!("Error: {:?}", err);
                        return None;
                    }
                },
            };

            let query = input.trim();
            if query.is_empty() {
                continue;
            }
            let _ = rl.add_history_entry(query);

            match interruptible(self.lookup(query)).await {
                None => println!("^C"),
                Some(Ok(Resolution::Found(record))) => return Some(record),
                Some(Ok(Resolution::NotFound)) => {
                    println!(
                        "Could not find problem \"{}\". Please try a different query.",
                        query
                    );
                }
                Some(Err(e)) => {
                    println!("Error: {}", e);
                    println!("Please try a different query.");
                }
            }
        }
    }

    async fn lookup(&self, query: &str) -> Result<Resolution, ResolveError> {
        ThinkingSpinner::new()
            .with_message("Looking up problem")
            .enabled(self.config.show_progress)
            .run(self.resolver.resolve(query))
            .await
    }

    /// Show the problem and open a fresh conversation about it
    fn start_problem(&mut self, record: ProblemRecord) {
        println!();
        println!("{}", ConsoleFormatter::format_problem_header(&record));
        println!();

        self.session.begin(TutorPrompt::system_instruction(&record));
        debug!("Tutoring problem {}", record.id());
        self.problem = Some(record);

        println!("Let's solve this problem together! Type /help for commands.");
    }

    /// Drop the conversation and start over on the same problem
    fn reset(&mut self) -> bool {
        match self.problem.as_ref() {
            Some(record) => {
                self.session.begin(TutorPrompt::system_instruction(record));
                true
            }
            None => false,
        }
    }

    fn history_summary(&self) -> String {
        format!(
            "{} messages in context ({} replies), keeping the instruction plus the last {}",
            self.session.messages().len(),
            self.session.turn_count(),
            self.session.max_history()
        )
    }

    async fn conversation_loop(&mut self, rl: &mut DefaultEditor) {
        loop {
            let line = match rl.readline("[You]: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let _ = rl.add_history_entry(line);

            match ReplCommand::parse(line) {
                Some(command) => {
                    if let Flow::Exit = self.handle_command(rl, command).await {
                        break;
                    }
                }
                None => self.send(line).await,
            }
        }
    }

    async fn handle_command(&mut self, rl: &mut DefaultEditor, command: ReplCommand) -> Flow {
        match command {
            ReplCommand::Exit => return Flow::Exit,
            ReplCommand::Help => self.print_help(),
            ReplCommand::Problem => {
                if let Some(record) = &self.problem {
                    println!();
                    println!("{}", ConsoleFormatter::format_problem_header(record));
                    println!("{}", ConsoleFormatter::format_topics(record));
                    println!();
                }
            }
            ReplCommand::New(query) => match self.ask_for_problem(rl, query).await {
                Some(record) => self.start_problem(record),
                None => return Flow::Exit,
            },
            ReplCommand::Reset => {
                if self.reset() {
                    println!("Conversation reset. Ask away!");
                }
            }
            ReplCommand::History => println!("{}", self.history_summary()),
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        Flow::Continue
    }

    /// Send one message and print the reply, or the error
    async fn send(&mut self, text: &str) {
        let spinner = ThinkingSpinner::new().enabled(self.config.show_progress);

        match interruptible(spinner.run(self.session.turn(text))).await {
            None => {
                println!("^C");
                println!("Reply cancelled. Your message stays in the conversation.");
            }
            Some(Ok(reply)) => {
                if std::io::stdout().is_terminal() {
                    // replace the raw input line with the styled one
                    print!("\x1b[F\x1b[K");
                }
                println!("{}", ConsoleFormatter::format_user_message(text));
                println!("\n{}\n", self.formatter.format_reply(&reply));
            }
            Some(Err(e)) => {
                println!("\nError: {}", e);
                println!("Please try again or type 'exit' to quit.");
            }
        }
    }
}

/// Await `call` unless Ctrl-C arrives first, in which case the call is dropped.
async fn interruptible<T>(call: impl Future<Output = T>) -> Option<T> {
    tokio::select! {
        output = call => Some(output),
        _ = tokio::signal::ctrl_c() => None,
    }
}
