mod args;
mod terminal;

use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use log::{error, info};
use quiz_core::{Question, QuestionId, Quiz};
use services::{QuestionLoader, QuestionView, QuizLoopService, source_for_location};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::args::{Args, Command, EnvDefaults, print_usage};
use crate::terminal::Style;

/// Line-oriented prompt over stdin. `None` means end of input.
struct Prompter {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompter {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        self.lines.next_line().await
    }

    async fn confirm(&mut self, prompt: &str) -> std::io::Result<bool> {
        Ok(self
            .ask(prompt)
            .await?
            .is_some_and(|line| terminal::is_yes(&line)))
    }
}

enum PlayOutcome {
    Finished,
    InputClosed,
}

/// Drive one quiz to completion, rendering each step.
async fn play(
    loop_svc: &QuizLoopService,
    quiz: &mut Quiz,
    prompter: &mut Prompter,
    delay: Duration,
    style: Style,
) -> Result<PlayOutcome, Box<dyn std::error::Error>> {
    while let Some(view) = QuestionView::from_quiz(quiz) {
        println!("{}", terminal::render_question(&view, style));

        let selected = loop {
            let Some(line) = prompter.ask("Your answer: ").await? else {
                return Ok(PlayOutcome::InputClosed);
            };
            match terminal::parse_selection(&line, &view.options) {
                Some(option) => break option.to_owned(),
                None => println!("{}", terminal::selection_hint(&view.options)),
            }
        };

        let outcome = loop_svc.answer_current(quiz, &selected)?;
        println!();
        print!("{}", terminal::render_feedback(&view, &outcome.feedback, style));

        // The quiz has already advanced; this only paces the next screen.
        tokio::time::sleep(delay).await;
        println!();
    }

    Ok(PlayOutcome::Finished)
}

async fn run_play(
    args: &Args,
    loop_svc: &QuizLoopService,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let style = Style {
        color: std::io::stdout().is_terminal(),
    };
    let mut prompter = Prompter::new();

    loop {
        println!("{}", terminal::render_loading());
        let mut quiz = match loop_svc.start_quiz().await {
            Ok(quiz) => quiz,
            Err(err) => {
                error!("error starting quiz: {err}");
                print!("{}", terminal::render_error(&err.to_string(), style));
                if prompter.confirm("Retry? [y/N] ").await? {
                    continue;
                }
                return Ok(ExitCode::FAILURE);
            }
        };

        match play(loop_svc, &mut quiz, &mut prompter, args.feedback_delay, style).await? {
            PlayOutcome::InputClosed => return Ok(ExitCode::SUCCESS),
            PlayOutcome::Finished => {}
        }

        let result = quiz.result();
        info!(
            "quiz finished: {}/{} ({}%)",
            result.correct_answers, result.total_questions, result.percentage
        );
        print!("{}", terminal::render_result(&result));
        if args.json {
            println!("{}", serde_json::to_string(&result)?);
        }

        if !prompter.confirm("\nRestart quiz? [y/N] ").await? {
            return Ok(ExitCode::SUCCESS);
        }
    }
}

async fn run_validate(
    args: &Args,
    loader: &QuestionLoader,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let questions = loader.load().await?;
    let unmatched: Vec<QuestionId> = questions
        .iter()
        .filter(|q| !q.has_matching_option())
        .map(Question::id)
        .collect();

    if args.json {
        let report = serde_json::json!({
            "source": loader.source().describe(),
            "questions": questions.len(),
            "unmatchedCorrectAnswers": unmatched,
        });
        println!("{report}");
    } else {
        println!(
            "ok: {} questions in {}",
            questions.len(),
            loader.source().describe()
        );
        for id in &unmatched {
            println!("  warning: question {id} has no option equal to its correct answer");
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1), EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if args.command == Command::Help {
        print_usage();
        return Ok(ExitCode::SUCCESS);
    }

    let loader = QuestionLoader::new(source_for_location(&args.source)?);
    info!("using question source {}", loader.source().describe());

    match args.command {
        Command::Play => run_play(&args, &QuizLoopService::new(loader)).await,
        Command::Validate => run_validate(&args, &loader).await,
        Command::Help => Ok(ExitCode::SUCCESS),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run().await {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
