//! 服务生命周期定义

/// 服务生命周期类型
///
/// 取值集合是封闭的: 除以下三种之外不存在其他生命周期,
/// 所有基于生命周期的分发都必须穷尽匹配, 不允许通配分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// 单例模式 - 整个提供者生命周期内只创建一个实例
    Singleton,
    /// 作用域模式 - 在同一作用域内共享实例
    Scoped,
    /// 瞬时模式 - 每次解析都创建新实例
    Transient,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::Scoped
    }
}
