//! Which screen the front end shows, driven by session outcomes.

use crm_core::Session;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Register,
    LoggedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    view: View,
    session: Option<Session>,
}

impl AppState {
    /// Initial state from a restored session, if any
    pub fn start(restored: Option<Session>) -> Self {
        match restored {
            Some(session) => Self {
                view: View::LoggedIn,
                session: Some(session),
            },
            None => Self {
                view: View::Login,
                session: None,
            },
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn show_register(&mut self) {
        if self.session.is_none() {
            self.view = View::Register;
        }
    }

    pub fn show_login(&mut self) {
        if self.session.is_none() {
            self.view = View::Login;
        }
    }

    pub fn logged_in(&mut self, session: Session) {
        self.session = Some(session);
        self.view = View::LoggedIn;
    }

    /// Registration never logs in; back to the login screen.
    pub fn registered(&mut self) {
        self.view = View::Login;
    }

    pub fn logged_out(&mut self) {
        self.session = None;
        self.view = View::Login;
    }
}
