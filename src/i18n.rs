// Localized user-facing messages.
// Every string the session prints goes through a `Localizer`. The locale is
// chosen once at startup and passed in; nothing here is global.

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl Locale {
    /// Pick a locale from a tag such as `zh_CN.UTF-8` or `en-US`.
    /// Any tag starting with `zh` selects Chinese; everything else English.
    pub fn from_tag(tag: &str) -> Self {
        let prefix = tag.trim().get(..2);
        if prefix.is_some_and(|p| p.eq_ignore_ascii_case("zh")) {
            Locale::Chinese
        } else {
            Locale::English
        }
    }
}

/// Every message the program can show, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TitleMain,
    MenuSelectedCount(usize),
    MenuOption1,
    MenuOption2,
    MenuOption3,
    MenuPrompt,
    DialogTitle,
    DialogFilterImages,
    DialogFilterAll,
    AddSuccess { added: usize, skipped: usize },
    AddNoNew,
    AddNoSelection,
    PasteHint,
    PasteQuoteHint,
    PromptFilePath,
    PasteNoInput,
    PasteAddSuccess { added: usize, skipped: usize },
    ErrorNoFilesSelected,
    ErrorInvalidOption,
    OutputTitle,
    OutputTotalCount(usize),
    OutputFormatOption1,
    OutputFormatOption2,
    OutputFormatPrompt,
    ExitPrompt,
    Success(String),
    Error(String),
    Info(String),
}

/// Message lookup service.
pub trait Localizer {
    fn localize(&self, message: &Message) -> String;
}

/// Built-in string tables for the supported locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Catalog { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Localizer for Catalog {
    fn localize(&self, message: &Message) -> String {
        match self.locale {
            Locale::English => english(message),
            Locale::Chinese => chinese(message),
        }
    }
}

fn english(message: &Message) -> String {
    use Message::*;
    match message {
        TitleMain => "Image File Protocol Path Tool".into(),
        MenuSelectedCount(n) => format!("Files selected: {n}"),
        MenuOption1 => "1. Select files with a dialog".into(),
        MenuOption2 => "2. Paste file paths".into(),
        MenuOption3 => "3. Finish and output paths".into(),
        MenuPrompt => "Choose an option (1-3): ".into(),
        DialogTitle => "Select image files".into(),
        DialogFilterImages => "Image files".into(),
        DialogFilterAll => "All files".into(),
        AddSuccess { added, skipped } => {
            format!("Added {added} file(s), skipped {skipped} duplicate or invalid file(s)")
        }
        AddNoNew => "No new valid files were added".into(),
        AddNoSelection => "No files were selected".into(),
        PasteHint => "Paste one or more file paths separated by spaces or semicolons.".into(),
        PasteQuoteHint => "Wrap paths containing spaces in quotes, or escape characters with \\.".into(),
        PromptFilePath => "File paths: ".into(),
        PasteNoInput => "No input received".into(),
        PasteAddSuccess { added, skipped } => {
            format!("Added {added} file(s) from the pasted paths, skipped {skipped}")
        }
        ErrorNoFilesSelected => "No files selected yet, add some files first".into(),
        ErrorInvalidOption => "Invalid option, please choose 1, 2 or 3".into(),
        OutputTitle => "File Protocol Paths".into(),
        OutputTotalCount(n) => format!("Total files: {n}"),
        OutputFormatOption1 => "1. One path per line".into(),
        OutputFormatOption2 => "2. Comma separated list".into(),
        OutputFormatPrompt => "Choose an output format (1-2): ".into(),
        ExitPrompt => "Press any key to exit...".into(),
        Success(text) => format!("[OK] {text}"),
        Error(text) => format!("[Error] {text}"),
        Info(text) => format!("[Info] {text}"),
    }
}

fn chinese(message: &Message) -> String {
    use Message::*;
    match message {
        TitleMain => "图片文件协议路径工具".into(),
        MenuSelectedCount(n) => format!("已选择文件数：{n}"),
        MenuOption1 => "1. 通过对话框选择文件".into(),
        MenuOption2 => "2. 粘贴文件路径".into(),
        MenuOption3 => "3. 完成并输出路径".into(),
        MenuPrompt => "请选择操作 (1-3)：".into(),
        DialogTitle => "选择图片文件".into(),
        DialogFilterImages => "图片文件".into(),
        DialogFilterAll => "所有文件".into(),
        AddSuccess { added, skipped } => {
            format!("已添加 {added} 个文件，跳过 {skipped} 个重复或无效文件")
        }
        AddNoNew => "没有添加新的有效文件".into(),
        AddNoSelection => "未选择任何文件".into(),
        PasteHint => "请粘贴一个或多个文件路径，用空格或分号分隔。".into(),
        PasteQuoteHint => "包含空格的路径请用引号括起来，或使用 \\ 转义字符。".into(),
        PromptFilePath => "文件路径：".into(),
        PasteNoInput => "未输入任何内容".into(),
        PasteAddSuccess { added, skipped } => {
            format!("已从粘贴的路径中添加 {added} 个文件，跳过 {skipped} 个")
        }
        ErrorNoFilesSelected => "尚未选择任何文件，请先添加文件".into(),
        ErrorInvalidOption => "无效的选项，请输入 1、2 或 3".into(),
        OutputTitle => "文件协议路径".into(),
        OutputTotalCount(n) => format!("文件总数：{n}"),
        OutputFormatOption1 => "1. 每行一个路径".into(),
        OutputFormatOption2 => "2. 逗号分隔列表".into(),
        OutputFormatPrompt => "请选择输出格式 (1-2)：".into(),
        ExitPrompt => "按任意键退出...".into(),
        Success(text) => format!("成功：{text}"),
        Error(text) => format!("错误：{text}"),
        Info(text) => format!("提示：{text}"),
    }
}
