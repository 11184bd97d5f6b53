pub mod submitter;
pub mod template;

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::arch::Platform;
use crate::config::LaunchPlan;
use crate::credentials::Credentials;
use crate::launcher::submitter::CommandSubmitter;
use crate::launcher::template::CommandTemplate;

/// One rendered command, before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedLaunch {
    pub index: u32,
    pub credentials: Credentials,
    pub command: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    pub index: u32,
    pub email: String,
    pub command: String,
    pub session_id: Option<Uuid>,
    pub pid: Option<u32>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchReport {
    pub platform: Platform,
    pub interpreter: String,
    pub script: String,
    pub launches: Vec<LaunchRecord>,
    pub submitted: usize,
    pub failed: usize,
}

pub struct Launcher {
    plan: LaunchPlan,
    template: CommandTemplate,
    submitter: Arc<dyn CommandSubmitter>,
}

impl Launcher {
    pub fn new(plan: LaunchPlan, submitter: Arc<dyn CommandSubmitter>) -> Self {
        let template = CommandTemplate::for_plan(&plan);
        Self {
            plan,
            template,
            submitter,
        }
    }

    /// Every command this launcher would submit, in index order.
    pub fn commands(&self) -> Vec<PlannedLaunch> {
        self.plan
            .indices()
            .map(|index| {
                let credentials = Credentials::synthetic(index);
                let invocation =
                    template::invocation(&self.plan.interpreter, &self.plan.script, &credentials);
                PlannedLaunch {
                    index,
                    command: self.template.render(&invocation),
                    credentials,
                }
            })
            .collect()
    }

    /// Submit one command per index. Submission failures are logged and
    /// recorded; they never stop the loop.
    pub fn launch(&self) -> LaunchReport {
        let mut launches = Vec::with_capacity(self.plan.count as usize);
        let mut failed = 0;

        for planned in self.commands() {
            let record = match self.submitter.submit(&planned.command) {
                Ok(handle) => {
                    tracing::info!(
                        index = planned.index,
                        email = %planned.credentials.email,
                        session_id = %handle.id,
                        pid = ?handle.pid,
                        "bot submitted"
                    );
                    LaunchRecord {
                        index: planned.index,
                        email: planned.credentials.email,
                        command: planned.command,
                        session_id: Some(handle.id),
                        pid: handle.pid,
                        error: None,
                    }
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        index = planned.index,
                        email = %planned.credentials.email,
                        error = %e,
                        "bot submission failed"
                    );
                    LaunchRecord {
                        index: planned.index,
                        email: planned.credentials.email,
                        command: planned.command,
                        session_id: None,
                        pid: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            launches.push(record);
        }

        let submitted = launches.len() - failed;
        tracing::info!(submitted, failed, platform = %self.plan.platform, "launch finished");

        LaunchReport {
            platform: self.plan.platform,
            interpreter: self.plan.interpreter.clone(),
            script: self.plan.script.clone(),
            launches,
            submitted,
            failed,
        }
    }
}
