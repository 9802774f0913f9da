//! Action 系统
//!
//! 按键处理只负责把按键翻译成 Action，由 App 统一执行（包括网络请求）

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    // ========== 导航 ==========
    /// 跳转到指定路径（写入历史）
    Navigate(String),
    /// 返回历史中的上一个路径
    GoBack,
    /// 向上移动选择
    MoveUp,
    /// 向下移动选择
    MoveDown,
    /// 打开选中链接的详情
    OpenSelected,
    /// 上一页
    PreviousPage,
    /// 下一页
    NextPage,
    /// 重新加载当前视图
    Reload,

    // ========== 表单输入 ==========
    /// 输入字符
    InputChar(char),
    /// 删除字符（Backspace）
    DeleteChar,
    /// 清空输入
    ClearInput,
    /// 提交表单
    Submit,

    // ========== 链接操作 ==========
    /// 删除列表中选中的链接
    DeleteSelected,
    /// 删除详情页的链接
    DeleteCurrent,
    /// 复制短链接
    CopyShortLink,

    // ========== 系统 ==========
    /// 退出程序
    Quit,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否是无操作
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }

    pub fn navigate(path: impl Into<String>) -> Self {
        Action::Navigate(path.into())
    }
}
