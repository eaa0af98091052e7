use chrono::{DateTime, Utc};
use chrono_tz::Asia::Ho_Chi_Minh;
use engine::{Transaction, TransactionKind};

pub(crate) const EMPTY_HISTORY: &str = "Chưa có giao dịch nào.";
pub(crate) const INVALID_INDEX: &str =
    "Số thứ tự không hợp lệ. Vui lòng kiểm tra lại lịch sử giao dịch.";
pub(crate) const DELETE_USAGE: &str = "Cú pháp: /delete <số thứ tự>";
pub(crate) const DELETE_FAILED: &str = "Lỗi khi xóa giao dịch. Vui lòng thử lại.";
pub(crate) const SAVE_FAILED: &str = "Lỗi khi lưu giao dịch. Vui lòng thử lại.";
pub(crate) const INVALID_AMOUNT: &str = "Số tiền không hợp lệ.";
pub(crate) const GENERIC_ERROR: &str = "Đã có lỗi xảy ra. Vui lòng thử lại sau.";

const START_TEXT: &str = "Chào mừng bạn đến với bot quản lý thu chi!

Hướng dẫn sử dụng:
- <b>Thêm thu nhập</b>: Nhập \"<code>+5tr lương</code>\" để thêm thu nhập 5 triệu từ lương.
- <b>Thêm chi tiêu</b>: Nhập \"<code>20k ăn sáng</code>\" để thêm chi tiêu 20k cho bữa sáng.

Các lệnh hỗ trợ:
- /wallet - Xem số dư tài khoản hiện tại.
- /history - Xem lịch sử các giao dịch.
- /delete &lt;số thứ tự&gt; - Xóa giao dịch theo số thứ tự trong lịch sử giao dịch.";

/// Text to send back, and whether it carries HTML markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub html: bool,
}

impl Reply {
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
        }
    }

    pub(crate) fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: true,
        }
    }
}

pub(crate) fn render_start() -> Reply {
    Reply::html(START_TEXT)
}

pub(crate) fn render_balance(balance: i64) -> Reply {
    Reply::plain(format!("Số dư hiện tại: {}đ", format_amount(balance)))
}

pub(crate) fn render_history(transactions: &[Transaction]) -> Reply {
    if transactions.is_empty() {
        return Reply::plain(EMPTY_HISTORY);
    }

    let lines: Vec<String> = transactions
        .iter()
        .enumerate()
        .map(|(i, tx)| {
            format!(
                "{}. {} {}đ từ {} ({})",
                i + 1,
                kind_short(tx.kind),
                format_amount(tx.amount),
                tx.note,
                format_date(tx.date)
            )
        })
        .collect();

    Reply::plain(format!("Lịch sử giao dịch:\n{}", lines.join("\n")))
}

pub(crate) fn render_recorded(tx: &Transaction) -> Reply {
    Reply::plain(format!(
        "Đã ghi lại giao dịch: {}đ ({}) - {}",
        format_amount(tx.amount),
        kind_label(tx.kind),
        tx.note
    ))
}

pub(crate) fn render_deleted(tx: &Transaction) -> Reply {
    Reply::plain(format!(
        "Đã xóa giao dịch: {}đ ({}) - {}",
        format_amount(tx.amount),
        kind_label(tx.kind),
        tx.note
    ))
}

fn kind_short(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Thu",
        TransactionKind::Expense => "Chi",
    }
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Thu nhập",
        TransactionKind::Expense => "Chi tiêu",
    }
}

/// Groups thousands with commas: `4980000` -> `4,980,000`.
pub(crate) fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Local time in Vietnam, `HH:MM:SS D/M/YYYY`.
pub(crate) fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Ho_Chi_Minh)
        .format("%H:%M:%S %-d/%-m/%Y")
        .to_string()
}
