//! 错误类型定义

use thiserror::Error;

/// 服务解析错误类型
///
/// 注册本身不会失败: 无效的生命周期与不兼容的服务映射
/// 在编译期就被拒绝, 运行期的错误只发生在解析阶段。
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("服务未注册: {type_name}")]
    NotRegistered { type_name: String },

    #[error("服务实例类型不匹配: {type_name}")]
    TypeMismatch { type_name: String },
}

impl ResolutionError {
    /// 创建服务未注册错误
    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::NotRegistered {
            type_name: type_name.into(),
        }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(type_name: impl Into<String>) -> Self {
        Self::TypeMismatch {
            type_name: type_name.into(),
        }
    }
}

/// 结果类型别名
pub type ResolutionResult<T> = Result<T, ResolutionError>;
