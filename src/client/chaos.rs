//! Chaos engineering client (experiments, runs, runtime variables)

use super::{ClientError, RestClient, Scope};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

const API_PREFIX: &str = "chaos/manager/api";

/// Client for the chaos manager service.
#[derive(Clone)]
pub struct ChaosClient {
    rest: RestClient,
}

impl ChaosClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List experiments in the scoped project.
    pub async fn list_experiments(
        &self,
        scope: &Scope,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), size.to_string()),
        ];
        self.rest
            .get(&format!("{API_PREFIX}/experiments"), scope, &query)
            .await
    }

    /// Fetch a single experiment by id.
    pub async fn get_experiment(
        &self,
        scope: &Scope,
        experiment_id: &str,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "{API_PREFIX}/experiments/{}",
            urlencoding::encode(experiment_id)
        );
        self.rest.get(&path, scope, &[]).await
    }

    /// Variables an experiment declares. Launching a run must supply a
    /// runtime value for each of them.
    pub async fn list_experiment_variables(
        &self,
        scope: &Scope,
        experiment_id: &str,
    ) -> Result<Vec<ExperimentVariable>, ClientError> {
        let path = format!(
            "{API_PREFIX}/experiments/{}/variables",
            urlencoding::encode(experiment_id)
        );
        let value = self.rest.get(&path, scope, &[]).await?;
        let envelope: VariablesEnvelope = serde_json::from_value(value)?;
        Ok(envelope.data)
    }

    /// Launch a run of the experiment.
    pub async fn run_experiment(
        &self,
        scope: &Scope,
        experiment_id: &str,
        body: &RunExperimentRequest,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "{API_PREFIX}/experiments/{}/run",
            urlencoding::encode(experiment_id)
        );
        self.rest.post(&path, scope, &[], body).await
    }

    /// List past runs of one experiment.
    pub async fn list_experiment_runs(
        &self,
        scope: &Scope,
        experiment_id: &str,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "{API_PREFIX}/experiments/{}/runs",
            urlencoding::encode(experiment_id)
        );
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), size.to_string()),
        ];
        self.rest.get(&path, scope, &query).await
    }
}

/// One variable declared by an experiment or its tasks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentVariable {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
struct VariablesEnvelope {
    #[serde(default)]
    data: Vec<ExperimentVariable>,
}

/// Body for launching an experiment run.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunExperimentRequest {
    /// Runtime value per declared variable name.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub runtime_values: HashMap<String, String>,
    /// Notify subscribers when the run finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
}
