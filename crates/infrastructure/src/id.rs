//! 主键生成
//!
//! 持久化的 id 形如 `thread-<suffix>`，后缀由可替换的生成器产生，
//! 测试中可注入固定序列。

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

pub(crate) fn prefixed_id(prefix: &str, generator: &dyn IdGenerator) -> String {
    format!("{prefix}-{}", generator.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIdGenerator;

    impl IdGenerator for FixedIdGenerator {
        fn generate(&self) -> String {
            "123".to_owned()
        }
    }

    #[test]
    fn prefixes_generated_suffix() {
        assert_eq!(prefixed_id("thread", &FixedIdGenerator), "thread-123");
    }

    #[test]
    fn uuid_ids_fit_the_id_column() {
        let id = prefixed_id("comment", &UuidIdGenerator);
        assert!(id.starts_with("comment-"));
        assert!(id.len() <= 50);
        assert_ne!(UuidIdGenerator.generate(), UuidIdGenerator.generate());
    }
}
