//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring engine over the MCP protocol so AI assistants can
//! score text via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core engine the
//! CLI commands use, and every `#[tool]` method delegates to it. Results are
//! returned as pretty-printed JSON.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use hciis_core::analysis::{Analyzer, Engine};
use hciis_core::error::{AnalysisError, AnalysisResult};
use hciis_core::{markdown, text};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the single-metric tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Metrics to run. Omit for the configured default (all metrics).
    pub checks: Option<Vec<String>>,
}

/// MCP server exposing the scoring engine to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    engine: Arc<Engine>,
    max_input_bytes: Option<usize>,
    default_checks: Option<Vec<String>>,
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default input limit and all metrics.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TokenizerUnavailable`] if the engine cannot
    /// be initialized.
    pub fn new() -> AnalysisResult<Self> {
        Self::with_config(
            Some(hciis_core::config::DEFAULT_MAX_INPUT_BYTES),
            None,
        )
    }

    /// Create a server with an explicit input limit and metric selection.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TokenizerUnavailable`] if the engine cannot
    /// be initialized.
    pub fn with_config(
        max_input_bytes: Option<usize>,
        default_checks: Option<Vec<String>>,
    ) -> AnalysisResult<Self> {
        Ok(Self {
            tool_router: Self::tool_router(),
            engine: Arc::new(Engine::new()?),
            max_input_bytes,
            default_checks,
        })
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "checks": hciis_core::ALL_CHECKS,
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text on all (or selected) metrics.
    #[tool(
        description = "Score text on cognitive load, manipulation, emotion, decision risk, and information quality. Each score comes with an explanation."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            checks = ?params.checks,
            "executing MCP tool"
        );

        self.check_size(&params.text)?;
        let input = if params.strip_markdown {
            markdown::to_plain_text(&params.text)
        } else {
            params.text
        };
        let checks = params.checks.as_ref().or(self.default_checks.as_ref());

        let report = self
            .engine
            .analyze_document(&input, checks.map(Vec::as_slice))
            .map_err(analysis_error)?;

        tracing::info!(
            tool = "analyze_text",
            sections = report.sections().len(),
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Score cognitive load.
    #[tool(
        description = "Estimate cognitive load (0-100) from sentence length, structural variation, and lexical density."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn cognitive_load(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_metric(params, self.engine.cognitive_load())
    }

    /// Score manipulation and persuasion.
    #[tool(
        description = "Score manipulation and persuasion (0-100) from fear, authority, certainty, and emotional language."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn manipulation(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_metric(params, self.engine.manipulation())
    }

    /// Detect dominant emotion and volatility.
    #[tool(
        description = "Detect the dominant emotion, emotional volatility, and suppressed emotion in text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn emotion(&self, Parameters(params): Parameters<TextParams>) -> Result<CallToolResult, McpError> {
        self.run_metric(params, self.engine.emotion())
    }

    /// Score decision density and ambiguity.
    #[tool(
        description = "Measure decision density and ambiguity (0-1) from decision verbs, risk mentions, and vague phrasing."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn decision_risk(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_metric(params, self.engine.decision_risk())
    }

    /// Score information quality.
    #[tool(
        description = "Score information quality (0-100) from evidence language, rhetoric, redundancy, and sentence variation."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn information_quality(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_metric(params, self.engine.information_quality())
    }
}

impl ProjectServer {
    fn check_size(&self, input: &str) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && input.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    input.len()
                ),
                None,
            ));
        }
        Ok(())
    }

    /// Single analyzers are total, so blank text yields the degenerate report.
    fn run_metric<A>(&self, params: TextParams, analyzer: A) -> Result<CallToolResult, McpError>
    where
        A: Analyzer,
        A::Report: Serialize,
    {
        tracing::debug!(tool = A::NAME, strip_md = params.strip_markdown, "executing MCP tool");

        self.check_size(&params.text)?;
        let input = if params.strip_markdown {
            markdown::to_plain_text(&params.text)
        } else {
            params.text
        };
        let report = analyzer.analyze(&text::normalize(&input));

        tracing::info!(tool = A::NAME, "MCP tool completed");
        to_json(&report)
    }
}

fn analysis_error(err: AnalysisError) -> McpError {
    match err {
        AnalysisError::EmptyInput | AnalysisError::UnknownCheck { .. } => {
            McpError::invalid_params(err.to_string(), None)
        }
        AnalysisError::TokenizerUnavailable(_) => McpError::internal_error(err.to_string(), None),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for a full assessment or the per-metric tools \
                 for a single score with its explanation.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
