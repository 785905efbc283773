//! 对象缓存层
//!
//! 认证中间件用它做 token -> 用户 的短期缓存，聚合计算不走缓存，
//! 每次请求都从存储层重新取数。
//!
//! 后端通过 `declare_object_cache_plugin!` 在启动时注册到插件表，
//! 运行哪个后端由配置的 `cache.type` 决定。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端
///
/// 展开为一个 ctor 函数，在进程启动时把构造器塞进插件表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<register_ $cache_type:snake _plugin>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(
                        || -> $crate::cache::register::BoxedObjectCacheFuture {
                            Box::pin(async {
                                let cache = $cache_type::new()
                                    .map_err($crate::errors::AcadSysError::cache_connection)?;
                                Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                            })
                        },
                    ),
                );
            }
        }
    };
}
