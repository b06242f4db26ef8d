//! Static label table: buttons first, then prompts and status messages.

use super::Lang;
use Lang::{Ru, Uz};

pub(super) fn lookup(key: &str, lang: Lang) -> Option<&'static str> {
    let value = match key {
        // --- Buttons ---
        "btn_search" => match lang {
            Uz => "Yukni qidirish 📦",
            Ru => "Поиск груза 📦",
        },
        "btn_feedback" => match lang {
            Uz => "Izoh qoldiring 📝",
            Ru => "Оставить отзыв 📝",
        },
        "btn_contacts" => match lang {
            Uz => "Manzil va kontaktlar 📍",
            Ru => "Адрес и контакты 📍",
        },
        "btn_language" => match lang {
            Uz => "Tilni tanlang 🌐",
            Ru => "Выбрать язык 🌐",
        },
        "btn_admin_panel" => match lang {
            Uz => "Admin paneli ⚙️",
            Ru => "Панель администратора ⚙️",
        },
        "btn_uzbek" => match lang {
            Uz => "O'zbek 🇺🇿",
            Ru => "Узбекский 🇺🇿",
        },
        "btn_russian" => match lang {
            Uz => "Русский 🇷🇺",
            Ru => "Русский 🇷🇺",
        },
        "btn_back" => match lang {
            Uz => "Orqaga qaytish 🔙",
            Ru => "Вернуться назад 🔙",
        },
        "btn_by_trek_code" => match lang {
            Uz => "Trek kodi orqali 🔍",
            Ru => "По трек-коду 🔍",
        },
        "btn_by_customer_code" => match lang {
            Uz => "Mijoz kodi orqali 🔎",
            Ru => "По коду клиента 🔎",
        },
        "btn_upload_database" => match lang {
            Uz => "Yangi database yuklash 📂",
            Ru => "Загрузить новую базу 📂",
        },

        // --- Prompts and replies ---
        "welcome" => match lang {
            Uz => {
                "Assalomu alaykum! 🎉\n\
                 Bu bot orqali JET CARGO yuklari haqida ma'lumot olishingiz mumkin\n\
                 Quyidagi tugmalardan birini tanlang:"
            }
            Ru => {
                "Здравствуйте! 🎉\n\
                 С помощью этого бота JET CARGO вы можете найти информацию о своём грузе.\n\
                 Выберите одну из кнопок ниже:"
            }
        },
        "choose_button" => match lang {
            Uz => "Iltimos, quyidagi tugmalardan birini tanlang:",
            Ru => "Пожалуйста, выберите одну из кнопок ниже:",
        },
        "select_search_type" => match lang {
            Uz => "Qanday qidirishni xohlaysiz?",
            Ru => "Как хотите искать груз?",
        },
        "enter_trek_code" => match lang {
            Uz => "Trek kodni kiriting:",
            Ru => "Введите трек-код:",
        },
        "enter_customer_code" => match lang {
            Uz => "Mijoz kodini kiriting:",
            Ru => "Введите код клиента:",
        },
        "trek_code_empty" => match lang {
            Uz => "Iltimos, trek kodini kiriting.",
            Ru => "Пожалуйста, введите трек-код.",
        },
        "customer_code_empty" => match lang {
            Uz => "Iltimos, mijoz kodini kiriting.",
            Ru => "Пожалуйста, введите код клиента.",
        },
        "feedback_prompt" => match lang {
            Uz => "Iltimos, izohingizni yozing:",
            Ru => "Пожалуйста, напишите ваш отзыв:",
        },
        "feedback_thanks" => match lang {
            Uz => "Rahmat! Izohingiz qabul qilindi. ✅",
            Ru => "Спасибо! Ваш отзыв принят. ✅",
        },
        "feedback_failed" => match lang {
            Uz => "Izohni saqlashda xato yuz berdi. Iltimos, keyinroq qayta urinib ko'ring.",
            Ru => "Ошибка при сохранении отзыва. Пожалуйста, попробуйте снова позже.",
        },
        "back_to_main" => match lang {
            Uz => "Asosiy menyuga qaytdingiz.",
            Ru => "Вы вернулись в главное меню.",
        },
        "back_to_search_type" => match lang {
            Uz => "Qidirish turini tanlashga qaytdingiz.",
            Ru => "Вы вернулись к выбору типа поиска.",
        },
        "contacts" => match lang {
            Uz => {
                "📍 Manzil: Toshkent sh., Chilanzar tumani, Arnasoy 5A\n\
                 📞 Telefon: +998 99-981-22-72\n\
                 📩 Telegram: @jetcargoo\n\
                 📷 Instagram: https://www.instagram.com/jetcargoo"
            }
            Ru => {
                "📍 Адрес: г. Ташкент, Чиланзарский район, Арнасай 5А\n\
                 📞 Телефон: +998 99-981-22-72\n\
                 📩 Telegram: @jetcargoo\n\
                 📷 Instagram: https://www.instagram.com/jetcargoo"
            }
        },
        "language_prompt" => match lang {
            Uz => "Iltimos, tilni tanlang:",
            Ru => "Пожалуйста, выберите язык:",
        },
        "language_set_uz" => match lang {
            Uz => "Til O'zbek tiliga o'zgartirildi! 🇺🇿",
            Ru => "Язык изменён на узбекский! 🇺🇿",
        },
        "language_set_ru" => match lang {
            Uz => "Til Rus tiliga o'zgartirildi! 🇷🇺",
            Ru => "Язык изменён на русский! 🇷🇺",
        },
        "language_invalid" => match lang {
            Uz => "Iltimos, tilni to'g'ri tanlang.",
            Ru => "Пожалуйста, выберите язык правильно.",
        },
        "admin_welcome" => match lang {
            Uz => "Admin paneliga xush kelibsiz! Quyidagi amallardan birini tanlang:",
            Ru => "Добро пожаловать в панель администратора! Выберите одно из действий:",
        },
        "admin_denied" => match lang {
            Uz => "Sizda admin huquqlari yo'q.",
            Ru => "У вас нет прав администратора.",
        },
        "admin_wrong_command" => match lang {
            Uz => "Noto'g'ri buyruq. Iltimos, quyidagi tugmalardan birini tanlang:",
            Ru => "Неверная команда. Пожалуйста, выберите одну из кнопок ниже:",
        },
        "upload_prompt" => match lang {
            Uz => "Iltimos, yangi database faylini (.xlsx yoki .csv) yuboring:",
            Ru => "Пожалуйста, отправьте новый файл базы данных (.xlsx или .csv):",
        },
        "upload_no_permission" => match lang {
            Uz => "Sizda fayl yuklash huquqi yo'q.",
            Ru => "У вас нет прав для загрузки файла.",
        },
        "upload_wrong_state" => match lang {
            Uz => "Fayl yuklash uchun avval admin paneliga kiring.",
            Ru => "Для загрузки файла сначала войдите в панель администратора.",
        },
        "upload_invalid_format" => match lang {
            Uz => "Faqat .xlsx yoki .csv fayllarni yuklash mumkin.",
            Ru => "Можно загружать только файлы .xlsx или .csv.",
        },
        "upload_success" => match lang {
            Uz => "✅ Yangi database muvaffaqiyatli yuklandi va saqlandi!",
            Ru => "✅ Новая база данных успешно загружена и сохранена!",
        },
        "send_failed" => match lang {
            Uz => "Xabar yuborishda xato yuz berdi. Iltimos, keyinroq qayta urinib ko'ring.",
            Ru => "Ошибка при отправке сообщения. Пожалуйста, попробуйте снова позже.",
        },
        _ => return None,
    };
    Some(value)
}
