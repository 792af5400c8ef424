use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::AppConfig;
use crate::flows::FlowSession;
use crate::services::leads::LeadSender;

pub struct AppState {
    pub config: AppConfig,
    pub leads: Box<dyn LeadSender>,
    /// Live flow sessions keyed by id. In-memory only; a restart
    /// drops them all.
    pub sessions: Mutex<HashMap<String, FlowSession>>,
}
