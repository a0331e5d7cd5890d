use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use mediaday_client::ensure_output_dir;
use mediaday_core::{update, FormState, Msg};
use mediaday_logging::{mediaday_info, mediaday_warn};

use super::effects::{unverified, EffectRunner};
use super::{config, logging, render};
use crate::cli::Cli;

pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let loaded = config::load(&cli)?;
    logging::initialize(loaded.config.log_destination);
    for note in &loaded.notes {
        mediaday_info!("{}", note);
    }
    ensure_output_dir(&loaded.config.output_dir).with_context(|| {
        format!(
            "preparing download directory {}",
            loaded.config.output_dir.display()
        )
    })?;
    mediaday_info!(
        "Starting with api_url={:?} origin={:?} output_dir={:?}",
        loaded.config.api_url,
        loaded.config.origin,
        loaded.config.output_dir
    );

    let runner = EffectRunner::new(&loaded.config);
    let stdout = io::stdout();
    let mut session = Session::new(runner, stdout.lock());

    match cli.one_shot() {
        Some((identifier, name)) => session.submit(identifier, name)?,
        None => {
            let stdin = io::stdin();
            run_form(&mut session, stdin.lock())?;
        }
    }

    Ok(if session.last_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Shows the form repeatedly until end of input.
fn run_form<W: Write>(session: &mut Session<W>, mut input: impl BufRead) -> Result<()> {
    render::render_title(&mut session.out)?;
    loop {
        let Some(identifier) = prompt(session, &mut input, render::LABEL_DOCUMENT)? else {
            break;
        };
        let Some(name) = prompt(session, &mut input, render::LABEL_NAME)? else {
            break;
        };
        session.submit(identifier, name)?;
    }
    Ok(())
}

fn prompt<W: Write>(
    session: &mut Session<W>,
    input: &mut impl BufRead,
    label: &str,
) -> Result<Option<String>> {
    render::render_prompt(&mut session.out, label)?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(session.out)?;
        return Ok(None);
    }
    // Only the line terminator is stripped; the value is otherwise verbatim.
    let value = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&line);
    Ok(Some(value.to_string()))
}

struct Session<W: Write> {
    state: FormState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Session<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: FormState::new(),
            runner,
            out,
        }
    }

    /// Enters both fields, submits, and waits for every request in flight.
    fn submit(&mut self, identifier: String, name: String) -> Result<()> {
        self.dispatch(Msg::IdentifierChanged(identifier))?;
        self.dispatch(Msg::NameChanged(name))?;
        self.dispatch(Msg::Submitted)?;
        self.wait_for_in_flight()
    }

    fn wait_for_in_flight(&mut self) -> Result<()> {
        while self.state.view().in_flight > 0 {
            match self.runner.next_msg() {
                Some(msg) => self.dispatch(msg)?,
                None => {
                    mediaday_warn!("Retrieval worker stopped with requests in flight");
                    for request_id in self.state.in_flight_requests() {
                        self.dispatch(unverified(request_id))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            let was_dirty = state.consume_dirty();
            let view = state.view();
            self.state = state;

            if was_dirty {
                render::render_status(&mut self.out, &view)?;
            }
            pending.extend(self.runner.enqueue(effects));
        }
        Ok(())
    }

    fn last_succeeded(&self) -> bool {
        self.state.status().is_some_and(|status| status.is_success())
    }
}
