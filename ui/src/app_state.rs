use std::ops::Deref;
use std::sync::Arc;

use api::prefs::user_prefs::UserPrefs;
use api::recorder::LocalDepositRecorder;
use api::session::SessionContext;
use api::session::SessionStore;

pub struct AppStateData {
    pub prefs: UserPrefs,
    pub session: SessionContext,
    pub recorder: LocalDepositRecorder,
}

/// Immutable services shared by every screen.
#[derive(Clone)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs, store: Arc<dyn SessionStore>) -> Self {
        Self(Arc::new(AppStateData {
            prefs,
            session: SessionContext::new(store.clone()),
            recorder: LocalDepositRecorder::new(store),
        }))
    }
}
