#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use horn::{serializers, trace, Atom, Engine, FactSet, Rule};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tower_http::cors::CorsLayer;
    use tracing::info;

    type SharedEngine = Arc<RwLock<Engine>>;

    #[derive(Debug, Deserialize)]
    struct InferRequest {
        /// Extra fact atoms merged into the loaded workspace facts
        #[serde(default)]
        facts: Vec<String>,
        /// Replacement rule list; omitted means the workspace rules
        #[serde(default)]
        rules: Option<Vec<Rule>>,
    }

    #[derive(Debug, Serialize)]
    struct InferResponse {
        derived: Vec<String>,
        trace: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct ProveRequest {
        goal: String,
        #[serde(default)]
        facts: Vec<String>,
        #[serde(default)]
        rules: Option<Vec<Rule>>,
    }

    #[derive(Debug, Serialize)]
    struct ProveResponse {
        proved: bool,
        facts: Vec<String>,
        trace: Vec<String>,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "horn=info,tower_http=info".into()),
            )
            .init();

        let shared_engine = Arc::new(RwLock::new(engine));

        let app = Router::new()
            .route("/health", get(health_check))
            .route("/infer", post(infer))
            .route("/prove", post(prove))
            .layer(CorsLayer::permissive())
            .with_state(shared_engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Horn server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "horn",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn infer(
        State(engine): State<SharedEngine>,
        Json(request): Json<InferRequest>,
    ) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
        let engine = engine.read().await;
        let (facts, rules) = working_set(&engine, &request.facts, request.rules)?;

        let inference = horn::forward::infer(&facts, &rules);

        Ok(Json(InferResponse {
            derived: inference
                .derived
                .sorted()
                .iter()
                .map(ToString::to_string)
                .collect(),
            trace: trace::render(&inference.trace),
        }))
    }

    async fn prove(
        State(engine): State<SharedEngine>,
        Json(request): Json<ProveRequest>,
    ) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
        let goal = request.goal.trim();
        if goal.is_empty() {
            return Err(bad_request("goal must not be empty"));
        }

        let engine = engine.read().await;
        let (facts, rules) = working_set(&engine, &request.facts, request.rules)?;

        let proof = horn::backward::prove(&Atom::new(goal), &facts, &rules);

        Ok(Json(ProveResponse {
            proved: proof.proved,
            facts: proof
                .facts
                .sorted()
                .iter()
                .map(ToString::to_string)
                .collect(),
            trace: trace::render(&proof.trace),
        }))
    }

    /// Merge request facts into the workspace facts and pick the rule
    /// list for this run. Every request gets its own working copies.
    fn working_set(
        engine: &Engine,
        extra_facts: &[String],
        rules: Option<Vec<Rule>>,
    ) -> Result<(FactSet, Vec<Rule>), (StatusCode, Json<ErrorResponse>)> {
        let mut facts = engine.facts().clone();
        for fact in extra_facts {
            let trimmed = fact.trim();
            if !trimmed.is_empty() {
                facts.insert(Atom::new(trimmed));
            }
        }

        let rules = match rules {
            Some(rules) => {
                for (index, rule) in rules.iter().enumerate() {
                    serializers::json::validate_rule(rule, index)
                        .map_err(|e| bad_request(&e.to_string()))?;
                }
                rules
            }
            None => engine.rules().to_vec(),
        };

        Ok((facts, rules))
    }

    fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
    }
}
