use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::debug;

use super::app::{App, Outcome};
use super::surface::WidgetSurface;

/// Take over the terminal and pump events into `app` until the user accepts
/// or cancels.
pub fn run<W: WidgetSurface>(mut app: App<W>) -> Result<Outcome> {
	let mut terminal = ratatui::init();
	execute!(stdout(), EnableMouseCapture)?;
	terminal.clear()?;

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();

	let result: Result<Outcome> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(Event::Resize(_, _)) => {}
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		app.tick(Instant::now());
		if let Err(err) = terminal.draw(|frame| app.draw(frame)) {
			break Err(err.into());
		}

		let mut maybe_outcome = None;
		while let Some(event) = pending_events.pop_front() {
			let outcome = match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					app.handle_key(key, Instant::now())
				}
				Event::Mouse(mouse) => app.handle_mouse(mouse),
				_ => None,
			};
			if outcome.is_some() {
				maybe_outcome = outcome;
				break;
			}
		}

		if let Some(outcome) = maybe_outcome {
			break Ok(outcome);
		}

		thread::sleep(Duration::from_millis(16));
	};

	let _ = execute!(stdout(), DisableMouseCapture);
	ratatui::restore();

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	debug!(accepted = result.as_ref().is_ok_and(|outcome| outcome.accepted), "terminal restored");
	result
}
