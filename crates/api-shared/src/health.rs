use crate::types::HealthRes;

/// Health service shared by the REST API and any future transports.
///
/// Reports liveness only. It never contacts the triple store, so a healthy response does not
/// mean lookups will succeed.
#[derive(Clone, Copy, Debug)]
pub struct HealthService;

impl HealthService {
    /// Liveness report for `GET /health`.
    ///
    /// # Returns
    /// Always `ok: true` with a fixed message while the process can serve requests.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "DME catalog is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_health_reports_ok() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert_eq!(res.message, "DME catalog is alive");
    }
}
