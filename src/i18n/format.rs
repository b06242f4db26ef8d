//! Format helpers for strings with interpolation.

use super::Lang;
use cargotrack_store::{ShipmentRecord, TrekMatch};

/// One "found" block for a tracking-code search. The queried code is
/// echoed in the header; the row fields follow without it.
pub fn trek_found(lang: Lang, code: &str, item: &TrekMatch) -> String {
    match lang {
        Lang::Uz => format!(
            "\n✅ Yuk topildi! (Trek kodi: {code})\n\n\
             📦 Mahsulot: {}\n\
             📏 Paket raqami: {}\n\
             ⚖️ Vazn: {} kg\n\
             🔢 Miqdor: {}\n\
             ✈️ Parvoz: {}\n\
             👤 Mijoz kodi: {}\n",
            item.shipping_name,
            item.package_number,
            item.weight_kg,
            item.quantity,
            item.flight,
            item.customer_code,
        ),
        Lang::Ru => format!(
            "\n✅ Груз найден! (Трек-код: {code})\n\n\
             📦 Товар: {}\n\
             📏 Номер пакета: {}\n\
             ⚖️ Вес: {} кг\n\
             🔢 Количество: {}\n\
             ✈️ Рейс: {}\n\
             👤 Код клиента: {}\n",
            item.shipping_name,
            item.package_number,
            item.weight_kg,
            item.quantity,
            item.flight,
            item.customer_code,
        ),
    }
}

/// One "not found" line for a tracking-code search.
pub fn trek_not_found(lang: Lang, code: &str) -> String {
    match lang {
        Lang::Uz => format!("❌ {code} trek kodiga mos yuk topilmadi.\n"),
        Lang::Ru => format!("❌ Груз с трек-кодом {code} не найден.\n"),
    }
}

/// Header sent before the per-record messages of a customer-code search.
pub fn customer_header(lang: Lang, code: &str) -> String {
    match lang {
        Lang::Uz => format!("📋 Mijoz kodi: {code} bo'yicha barcha yuklar ro'yxati:"),
        Lang::Ru => format!("📋 Список всех грузов по коду клиента: {code}:"),
    }
}

/// One numbered record of a customer-code search, tracking code included.
pub fn customer_record(lang: Lang, idx: usize, item: &ShipmentRecord) -> String {
    let rule = "-".repeat(30);
    match lang {
        Lang::Uz => format!(
            "📦 Yuk #{idx}\n\
             🔢 Trek kodi: {}\n\
             📦 Mahsulot: {}\n\
             📏 Paket raqami: {}\n\
             ⚖️ Vazn: {} kg\n\
             🔢 Miqdor: {}\n\
             ✈️ Parvoz: {}\n\
             👤 Mijoz kodi: {}\n\
             {rule}",
            item.tracking_code,
            item.shipping_name,
            item.package_number,
            item.weight_kg,
            item.quantity,
            item.flight,
            item.customer_code,
        ),
        Lang::Ru => format!(
            "📦 Груз #{idx}\n\
             🔢 Трек-код: {}\n\
             📦 Товар: {}\n\
             📏 Номер пакета: {}\n\
             ⚖️ Вес: {} кг\n\
             🔢 Количество: {}\n\
             ✈️ Рейс: {}\n\
             👤 Код клиента: {}\n\
             {rule}",
            item.tracking_code,
            item.shipping_name,
            item.package_number,
            item.weight_kg,
            item.quantity,
            item.flight,
            item.customer_code,
        ),
    }
}

/// "Nothing for this customer code" message.
pub fn customer_not_found(lang: Lang, code: &str) -> String {
    match lang {
        Lang::Uz => format!("❌ {code} mijoz kodiga mos yuk topilmadi."),
        Lang::Ru => format!("❌ Груз с кодом клиента {code} не найден."),
    }
}

/// Upload failure echoed to the admin. The one place a raw error string
/// reaches a user.
pub fn upload_error(lang: Lang, err: &str) -> String {
    match lang {
        Lang::Uz => format!("Faylni yuklashda xato yuz berdi: {err}"),
        Lang::Ru => format!("Ошибка при загрузке файла: {err}"),
    }
}
