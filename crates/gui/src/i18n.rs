use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.new" => if ru { "Новый сад" } else { "New garden" },
        "menu.open" => if ru { "Открыть сад..." } else { "Open garden..." },
        "menu.save" => if ru { "Сохранить  Ctrl+S" } else { "Save  Ctrl+S" },
        "menu.save_as" => if ru { "Сохранить как..." } else { "Save as..." },
        "menu.import" => if ru { "Импорт JSON..." } else { "Import JSON..." },
        "menu.import_title" => if ru { "Импорт сада из JSON" } else { "Import garden JSON" },
        "menu.export" => if ru { "Экспорт JSON..." } else { "Export JSON..." },
        "menu.export_title" => if ru { "Папка для экспорта" } else { "Export folder" },
        "menu.template" => if ru { "Загрузить шаблон..." } else { "Load template..." },
        "menu.template_title" => if ru { "Шаблон сада" } else { "Garden template" },
        "menu.share" => if ru { "Поделиться ссылкой" } else { "Share link" },
        "menu.delete_garden" => if ru { "Удалить сад" } else { "Delete garden" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.edit" => if ru { "Правка" } else { "Edit" },
        "menu.undo" => if ru { "Отменить  Ctrl+Z" } else { "Undo  Ctrl+Z" },
        "menu.redo" => if ru { "Повторить  Ctrl+Shift+Z" } else { "Redo  Ctrl+Shift+Z" },
        "menu.delete" => if ru { "Удалить  Del" } else { "Delete  Del" },
        "menu.deselect" => if ru { "Снять выделение  Esc" } else { "Deselect  Esc" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.catalog" => if ru { "Каталог" } else { "Catalog" },
        "menu.properties" => if ru { "Свойства" } else { "Properties" },
        "menu.language" => if ru { "Язык" } else { "Language" },
        "menu.preferences" => if ru { "Настройки..." } else { "Preferences..." },

        "view.2d" => if ru { "2D план" } else { "2D plan" },
        "view.3d" => if ru { "3D вид" } else { "3D view" },

        // ── Toolbar ─────────────────────────────────────────
        "tb.new" => if ru { "Новый" } else { "New" },
        "tb.save" => if ru { "Сохранить" } else { "Save" },
        "tb.share" => if ru { "Поделиться" } else { "Share" },
        "tb.undo" => if ru { "Отменить" } else { "Undo" },
        "tb.redo" => if ru { "Повторить" } else { "Redo" },
        "tb.delete" => if ru { "Удалить" } else { "Delete" },
        "tb.zoom_out" => if ru { "Отдалить" } else { "Zoom out" },
        "tb.zoom_in" => if ru { "Приблизить" } else { "Zoom in" },
        "tb.grid" => if ru { "Сетка" } else { "Grid" },
        "tb.snap" => if ru { "Привязка" } else { "Snap" },

        // ── Catalog ─────────────────────────────────────────
        "catalog.title" => if ru { "Каталог" } else { "Catalog" },
        "catalog.search" => if ru { "Поиск..." } else { "Search..." },
        "catalog.empty" => if ru { "Ничего не найдено" } else { "Nothing found" },
        "catalog.hint" => if ru {
            "Перетащите элемент на участок"
        } else {
            "Drag an element onto the plot"
        },

        "category.garden_plan" => if ru { "План сада" } else { "Garden plan" },
        "category.plot" => if ru { "Участок" } else { "Plot" },
        "category.houses" => if ru { "Постройки" } else { "Houses" },
        "category.plants" => if ru { "Растения" } else { "Plants" },
        "category.furniture" => if ru { "Мебель" } else { "Furniture" },
        "category.ponds" => if ru { "Водоёмы" } else { "Ponds" },
        "category.notes" => if ru { "Заметки" } else { "Notes" },

        // ── Properties ──────────────────────────────────────
        "prop.title" => if ru { "Свойства" } else { "Properties" },
        "prop.select_element" => if ru { "Выберите элемент" } else { "Select an element" },
        "prop.name" => if ru { "Название" } else { "Name" },
        "prop.type" => if ru { "Тип" } else { "Type" },
        "prop.position" => if ru { "Позиция" } else { "Position" },
        "prop.rotation" => if ru { "Поворот, °" } else { "Rotation, °" },
        "prop.properties" => if ru { "Параметры" } else { "Parameters" },
        "prop.delete" => if ru { "Удалить элемент" } else { "Delete element" },

        // ── Viewport ────────────────────────────────────────
        "viewport.hint" => if ru {
            "Перетащите элементы из каталога. ПКМ: поворот/сдвиг, колесо: масштаб"
        } else {
            "Drag elements from the catalog. RMB: orbit/pan, wheel: zoom"
        },

        // ── Status bar ──────────────────────────────────────
        "status.unsaved_garden" => if ru { "Несохранённый сад" } else { "Unsaved garden" },
        "status.elements" => if ru { "Элементов" } else { "Elements" },
        "status.selected" => if ru { "Выбрано" } else { "Selected" },
        "status.ready" => if ru { "Готово" } else { "Ready" },

        // ── Notices ─────────────────────────────────────────
        "notice.exported" => if ru { "Экспортировано" } else { "Exported" },
        "notice.link_copied" => if ru { "Ссылка скопирована" } else { "Link copied" },
        "notice.list_failed" => if ru {
            "Не удалось прочитать сады"
        } else {
            "Failed to list gardens"
        },

        // ── Dialogs ─────────────────────────────────────────
        "dialog.ok" => if ru { "ОК" } else { "OK" },
        "dialog.cancel" => if ru { "Отмена" } else { "Cancel" },
        "dialog.save" => if ru { "Сохранить" } else { "Save" },
        "dialog.close" => if ru { "Закрыть" } else { "Close" },

        "confirm.title" => if ru { "Подтверждение" } else { "Confirm" },
        "confirm.new_garden" => if ru {
            "Начать новый сад? Несохранённые изменения будут потеряны."
        } else {
            "Start a new garden? Unsaved changes will be lost."
        },
        "confirm.delete_garden" => if ru { "Удалить сад" } else { "Delete garden" },

        "save.title" => if ru { "Сохранить сад" } else { "Save garden" },
        "save.name" => if ru { "Название" } else { "Name" },
        "save.description" => if ru { "Описание" } else { "Description" },

        "share.title" => if ru { "Ссылка на сад" } else { "Garden link" },
        "share.hint" => if ru {
            "Откройте ссылку, чтобы загрузить этот сад"
        } else {
            "Open the link to load this garden"
        },
        "share.copy" => if ru { "Копировать" } else { "Copy" },

        "open.title" => if ru { "Сохранённые сады" } else { "Saved gardens" },
        "open.empty" => if ru { "Нет сохранённых садов" } else { "No saved gardens" },
        "open.elements" => if ru { "эл." } else { "elements" },
        "open.load" => if ru { "Открыть" } else { "Open" },

        // ── Settings ────────────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Preferences" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.snap_grid" => if ru { "Привязка к сетке" } else { "Snap to grid" },
        "settings.grid_size" => if ru { "Размер ячейки, м" } else { "Cell size, m" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },

        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.zoom_speed" => if ru { "Скорость масштаба 3D" } else { "3D zoom speed" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },
        "settings.sel_color" => if ru { "Цвет выделения" } else { "Selection color" },

        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
