//! 对象缓存层
//!
//! 会话中间件用它缓存 token -> 用户 的解析结果，
//! 后端可插拔：moka（进程内）或 redis，由配置选择。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册缓存后端插件
///
/// 在实现模块顶部调用，进程启动时通过 ctor 写入注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(
                    || -> $crate::cache::register::BoxedObjectCacheFuture {
                        Box::pin(async {
                            let cache = <$plugin>::new()
                                .map_err($crate::errors::QuizGenError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    },
                ),
            );
        }
    };
}
