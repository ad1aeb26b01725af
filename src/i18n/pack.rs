use super::LanguageCode;

/// Every label the client shows, in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePackEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Label of the submit button.
    pub button: &'static str,
    /// Shown next to the spinner while an analysis is in flight.
    pub loading: &'static str,
    /// Title of the handle field.
    pub handle_label: &'static str,
    /// Hint shown in the empty handle field.
    pub placeholder: &'static str,
    pub avatar_label: &'static str,
    pub mbti: &'static str,
    pub animal: &'static str,
    pub description: &'static str,
    /// Notice raised when the handle is empty.
    pub alert_input: &'static str,
    /// Failure message used when the service gives no error text.
    pub request_failed: &'static str,
    pub error_prefix: &'static str,
    pub dismiss_hint: &'static str,
    pub footer: &'static str,
    /// Footer while an analysis issued before a language switch is still
    /// outstanding.
    pub still_running: &'static str,
}

/// Return the label set for `code`.
pub fn lookup(code: LanguageCode) -> &'static LanguagePackEntry {
    match code {
        LanguageCode::Cn => &PACKS[0],
        LanguageCode::Jp => &PACKS[1],
        LanguageCode::En => &PACKS[2],
    }
}

// ---------------------------------------------------------------------------
// Built-in language packs
// ---------------------------------------------------------------------------

static PACKS: [LanguagePackEntry; 3] = [
    // 0 - cn
    LanguagePackEntry {
        title: "BlueSky 人格分析器",
        subtitle: "输入您的 Handle，AI 将为您揭示 MBTI 与灵魂动物",
        button: "开始分析",
        loading: "正在连接神经元...可能需要 10-20 秒",
        handle_label: "@ 账号",
        placeholder: "例如: scievents.bsky.social",
        avatar_label: "头像",
        mbti: "MBTI 类型",
        animal: "灵魂动物",
        description: "性格画像",
        alert_input: "请输入有效的 BlueSky Handle！",
        request_failed: "请求失败",
        error_prefix: "错误",
        dismiss_hint: "按 Enter 关闭",
        footer: "[Enter] 分析  [Tab] 切换语言  [F1/F2/F3] 中文/日本語/English  [Esc] 退出",
        still_running: "上一次分析仍在进行中，完成后即可再次分析",
    },
    // 1 - jp
    LanguagePackEntry {
        title: "BlueSky 性格診断",
        subtitle: "Handleを入力して、AIがMBTIと動物占いを明らかにします",
        button: "診断開始",
        loading: "ニューロン接続中... 10-20秒かかる場合があります",
        handle_label: "@ ハンドル",
        placeholder: "例: scievents.bsky.social",
        avatar_label: "アバター",
        mbti: "MBTI タイプ",
        animal: "動物占い",
        description: "性格プロフィール",
        alert_input: "有効なBlueSky Handleを入力してください！",
        request_failed: "リクエストに失敗しました",
        error_prefix: "エラー",
        dismiss_hint: "Enterで閉じる",
        footer: "[Enter] 診断  [Tab] 言語切替  [F1/F2/F3] 中文/日本語/English  [Esc] 終了",
        still_running: "前回の診断がまだ実行中です。完了後に再度診断できます",
    },
    // 2 - en
    LanguagePackEntry {
        title: "BlueSky Personality Analyzer",
        subtitle: "Enter your Handle, AI will reveal your MBTI & Spirit Animal",
        button: "Analyze",
        loading: "Connecting neurons... may take 10-20 seconds",
        handle_label: "@ Handle",
        placeholder: "e.g. scievents.bsky.social",
        avatar_label: "Avatar",
        mbti: "MBTI Type",
        animal: "Spirit Animal",
        description: "Portrait",
        alert_input: "Please enter a valid BlueSky Handle!",
        request_failed: "Request failed",
        error_prefix: "Error",
        dismiss_hint: "Press Enter to dismiss",
        footer: "[Enter] Analyze  [Tab] Language  [F1/F2/F3] 中文/日本語/English  [Esc] Quit",
        still_running: "Previous analysis still running; Analyze is available once it finishes",
    },
];
