use crate::listing::Listing;
use async_trait::async_trait;
use hostprobe_error::Result;
use std::borrow::Cow;

/// 一个可以列出已安装包的系统包管理器
#[async_trait]
pub trait PackageManager: Send + Sync {
    fn name(&self) -> &str;

    /// 按该包管理器的命名习惯调整查询片段，默认原样返回
    fn normalize<'a>(&self, fragment: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(fragment)
    }

    async fn list_installed(&self) -> Result<Listing>;

    async fn contains(&self, fragment: &str) -> Result<bool> {
        let listing = self.list_installed().await?;
        Ok(listing.contains(&self.normalize(fragment)))
    }
}
