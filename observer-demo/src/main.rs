use std::{
    io::{self, Write},
    rc::Rc,
};

use common::subject_observer::{StateSubject, Subject};
use log::info;

use crate::{config::app::AppConfig, console_observer::ConsoleObserver};
pub use error::AppError;

mod config;
mod console_observer;
mod error;

/// Registers one console observer per configured name, in order, then
/// applies each configured state to the subject.
fn run<W, F>(config: &AppConfig, mut sink: F) -> Rc<StateSubject>
where
    W: Write + 'static,
    F: FnMut() -> W,
{
    let subject = Rc::new(StateSubject::new());
    for name in &config.observers {
        let observer = ConsoleObserver::with_writer(name, &subject, sink());
        info!("Registering observer {}", observer.name());
        subject.register_observer(Rc::new(observer));
    }

    for state in &config.states {
        info!("Changing state to {state}");
        subject.set_state(state.clone());
    }
    subject
}

fn main() -> Result<(), AppError> {
    let config = AppConfig::new()?;
    crate::config::log::init(config.level_filter()?)?;

    info!(
        "Running with {} observers and {} state changes",
        config.observers.len(),
        config.states.len()
    );
    run(&config, io::stdout);
    Ok(())
}
