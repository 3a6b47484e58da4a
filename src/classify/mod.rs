use core::fmt;
use std::collections::HashMap;

lazy_static! {
    /// значения General Category, определяющие класс ширины
    static ref GENERAL_CATEGORY_CLASSES: HashMap<&'static str, WidthClass> = [
        // Cn - не назначен
        ("Cn", WidthClass::Invalid),
        // Me, Mn - охватывающие и неразрывные комбинирующие маркеры
        ("Me", WidthClass::ZeroWidth),
        ("Mn", WidthClass::ZeroWidth),
        // Cf - управляющие символы форматирования
        ("Cf", WidthClass::ZeroWidth),
    ]
    .into_iter()
    .collect();

    /// значения East Asian Width, определяющие класс ширины
    static ref EAST_ASIAN_WIDTH_CLASSES: HashMap<&'static str, WidthClass> = [
        ("W", WidthClass::DoubleWidth),
        ("F", WidthClass::DoubleWidth),
    ]
    .into_iter()
    .collect();
}

/// класс ширины, для которого собирается таблица
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthClass
{
    /// кодпоинты без назначенной категории
    Invalid,
    /// комбинирующие маркеры и символы форматирования, не занимают колонку
    ZeroWidth,
    /// широкие и полноширинные символы, занимают две колонки
    DoubleWidth,
}

impl WidthClass
{
    pub const ALL: [WidthClass; 3] = [Self::Invalid, Self::ZeroWidth, Self::DoubleWidth];

    pub fn name(&self) -> &'static str
    {
        match self {
            Self::Invalid => "invalid",
            Self::ZeroWidth => "zero_width",
            Self::DoubleWidth => "double_width",
        }
    }
}

impl fmt::Display for WidthClass
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.name())
    }
}

/// классификация значений свойства одного файла UCD
pub trait Classify
{
    /// классы, которые может дать этот файл
    fn classes(&self) -> &'static [WidthClass];

    /// класс для значения свойства, None - запись не нужна
    fn classify(&self, label: &str) -> Option<WidthClass>;
}

/// extracted/DerivedGeneralCategory.txt
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralCategory;

impl Classify for GeneralCategory
{
    fn classes(&self) -> &'static [WidthClass]
    {
        &[WidthClass::Invalid, WidthClass::ZeroWidth]
    }

    fn classify(&self, label: &str) -> Option<WidthClass>
    {
        GENERAL_CATEGORY_CLASSES.get(label).copied()
    }
}

/// EastAsianWidth.txt
#[derive(Debug, Clone, Copy, Default)]
pub struct EastAsianWidth;

impl Classify for EastAsianWidth
{
    fn classes(&self) -> &'static [WidthClass]
    {
        &[WidthClass::DoubleWidth]
    }

    fn classify(&self, label: &str) -> Option<WidthClass>
    {
        EAST_ASIAN_WIDTH_CLASSES.get(label).copied()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn general_category()
    {
        let gc = GeneralCategory;

        assert_eq!(gc.classify("Cn"), Some(WidthClass::Invalid));
        assert_eq!(gc.classify("Me"), Some(WidthClass::ZeroWidth));
        assert_eq!(gc.classify("Mn"), Some(WidthClass::ZeroWidth));
        assert_eq!(gc.classify("Cf"), Some(WidthClass::ZeroWidth));

        for label in ["Lu", "Mc", "Cc", "Co", "Cs", "Zs", "C", "M", "mn", ""] {
            assert_eq!(gc.classify(label), None, "{}", label);
        }
    }

    #[test]
    fn east_asian_width_exact_labels()
    {
        let eaw = EastAsianWidth;

        assert_eq!(eaw.classify("W"), Some(WidthClass::DoubleWidth));
        assert_eq!(eaw.classify("F"), Some(WidthClass::DoubleWidth));

        // подстроки "WF" не являются значениями свойства
        for label in ["WF", "", "Na", "N", "A", "H", "w"] {
            assert_eq!(eaw.classify(label), None, "{}", label);
        }
    }

    #[test]
    fn classes_are_declared()
    {
        let gc = GeneralCategory;
        let eaw = EastAsianWidth;

        for label in ["Cn", "Me", "Mn", "Cf"] {
            assert!(gc.classes().contains(&gc.classify(label).unwrap()));
        }

        for label in ["W", "F"] {
            assert!(eaw.classes().contains(&eaw.classify(label).unwrap()));
        }
    }

    #[test]
    fn names()
    {
        let names: Vec<String> = WidthClass::ALL.iter().map(|c| c.to_string()).collect();

        assert_eq!(names, ["invalid", "zero_width", "double_width"]);
    }
}
