/// 包管理器 "列出已安装包" 命令的原始输出
///
/// 不做任何解析，只按子串查找。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing(String);

impl Listing {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl From<String> for Listing {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
