use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one running service process, reported by `/info`.
///
/// Built once at start-up so `instance_id` stays stable for the life of the
/// process. `version` is the binary's own `CARGO_PKG_VERSION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub model: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    pub fn for_process(service: &str, version: &str, model: &str) -> Self {
        Self {
            service: service.to_owned(),
            version: version.to_owned(),
            model: model.to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_caller_version_and_model() {
        let info = ServiceInfo::for_process("referee-api", "2.4.1", "llama-3.1-8b-instant");
        assert_eq!(info.service, "referee-api");
        assert_eq!(info.version, "2.4.1");
        assert_eq!(info.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn each_process_gets_its_own_instance_id() {
        let a = ServiceInfo::for_process("referee-api", "0.1.0", "m");
        let b = ServiceInfo::for_process("referee-api", "0.1.0", "m");
        assert_ne!(a.instance_id, b.instance_id);
    }
}
