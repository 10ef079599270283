use std::net::IpAddr;

use poem::Request;

use super::{request_id::RequestId, request_source::RequestSource};

/// Request context that flows from the API and CLI layers into coordinators
///
/// Carries what the workflow logs need to tie a collection change back to the
/// request that caused it. There is no authentication in this service, so the
/// context never gates an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,

    /// Source of the request (API or CLI)
    pub source: RequestSource,

    /// Who initiated the operation, for log lines
    pub actor_id: String,
}

impl RequestContext {
    /// Create a RequestContext for an HTTP request
    pub fn from_request(req: &Request) -> Self {
        let ip_address = Self::extract_ip_address(req);
        let actor_id = ip_address
            .map(|ip| format!("api:{}", ip))
            .unwrap_or_else(|| "api:unknown".to_string());

        let ctx = Self {
            ip_address,
            request_id: RequestId::new(),
            source: RequestSource::API,
            actor_id,
        };

        tracing::trace!("Request context created: {:?}", ctx);
        ctx
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
        }
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Proxy/load balancer
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // nginx
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }
}
