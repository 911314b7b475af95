//! Fixed vocabularies and hard-coded UI text.
//!
//! The grid ships with a Turkish surface; there is deliberately no i18n
//! layer. Hosts that need different wording supply their own columns and
//! render the facade output themselves.

/// Status value that marks a record as active. `Record::is_active` is always
/// derived from this, never stored independently.
pub const STATUS_ACTIVE: &str = "Aktif";

pub const STATUSES: [&str; 3] = ["Aktif", "Pasif", "Beklemede"];
pub const DEPARTMENTS: [&str; 5] = ["Yazılım", "Pazarlama", "Satış", "İK", "Finans"];
pub const CITIES: [&str; 5] = ["İstanbul", "Ankara", "İzmir", "Bursa", "Antalya"];
pub const FIRST_NAMES: [&str; 6] = ["Ahmet", "Mehmet", "Ayşe", "Fatma", "Ali", "Elif"];
pub const LAST_NAMES: [&str; 5] = ["Yılmaz", "Kaya", "Demir", "Şahin", "Çelik"];

/// Allowed page sizes. The second entry is the default.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// User-facing strings, exposed so hosts and the export layer agree on
/// wording (the boolean formatter and the progress messages read from here).
pub mod texts {
    pub const YES: &str = "Evet";
    pub const NO: &str = "Hayır";
    pub const ALL: &str = "Tümü";
    pub const RECORDS_FOUND: &str = "kayıt bulundu";
    pub const SELECTED: &str = "seçili";
    pub const NO_DATA_FOUND: &str = "Veri bulunamadı";
    pub const ROWS_PER_PAGE: &str = "Sayfa başına:";

    pub const EXPORT_STARTING: &str = "Export başlatılıyor...";
    pub const EXPORT_PREPARING_DATA: &str = "Veriler hazırlanıyor...";
    pub const EXPORT_CONVERTING_FORMAT: &str = "Format dönüştürülüyor...";
    pub const EXPORT_CREATING_FILE: &str = "Dosya oluşturuluyor...";
    pub const EXPORT_COMPLETED: &str = "Export tamamlandı!";
    pub const EXPORT_ERROR: &str = "Export sırasında hata oluştu!";
    pub const POPUP_BLOCKER: &str = "Lütfen popup engelleyiciyi devre dışı bırakın ve tekrar deneyin.";
    pub const SELECT_MIN_ONE_COLUMN: &str = "Lütfen dışa aktarmak için en az bir sütun seçin.";

    pub const CSV_DESCRIPTION: &str = "Virgülle ayrılmış değerler";
    pub const EXCEL_DESCRIPTION: &str = "Microsoft Excel formatı";
    pub const PDF_DESCRIPTION: &str = "Taşınabilir doküman formatı";
    pub const WORD_DESCRIPTION: &str = "Microsoft Word dokümanı";

    pub const COMMA: &str = "Virgül (,)";
    pub const SEMICOLON: &str = "Noktalı virgül (;)";
    pub const TAB: &str = "Tab";
}
