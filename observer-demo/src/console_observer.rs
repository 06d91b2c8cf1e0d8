use std::{
    cell::RefCell,
    io::{self, Stdout, Write},
    rc::{Rc, Weak},
};

use common::subject_observer::{Observer, StateSubject};
use log::{error, warn};

const UNSET_STATE: &str = "<unset>";

/// Renders `<name> received state update: <state>` each time its subject
/// changes. Write failures are logged and swallowed so the rest of the
/// notification pass still runs.
pub struct ConsoleObserver<W = Stdout> {
    name: String,
    subject: Weak<StateSubject>,
    out: RefCell<W>,
}

impl ConsoleObserver {
    pub fn new(name: &str, subject: &Rc<StateSubject>) -> Self {
        Self::with_writer(name, subject, io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn with_writer(name: &str, subject: &Rc<StateSubject>, out: W) -> Self {
        ConsoleObserver {
            name: name.to_string(),
            subject: Rc::downgrade(subject),
            out: RefCell::new(out),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, state: Option<&str>) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(
            out,
            "{} received state update: {}",
            self.name,
            state.unwrap_or(UNSET_STATE)
        )?;
        out.flush()
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn update(&self) {
        let Some(subject) = self.subject.upgrade() else {
            warn!("{} notified after its subject was dropped", self.name);
            return;
        };
        let state = subject.state();
        if let Err(err) = self.render(state.as_deref()) {
            error!("{} failed to render state update: {}", self.name, err);
        }
    }
}
