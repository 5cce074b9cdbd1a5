use crate::menu::TagFilter;
use crate::models::{MenuCategory, MenuTag};
use crate::schedule::MealPeriod;

/// Keys the application itself renders. Free-form dotted keys remain
/// available through [`Catalog::translate`](super::Catalog::translate).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TranslationKey {
    NavHome,
    NavMenu,
    NavLocation,
    HeroSubtitle,
    HeroCtaMenu,
    HeroCtaDirections,
    WhyTitle,
    HoursTitle,
    HoursNow,
    HoursBreakfast,
    HoursLunch,
    HoursDinner,
    HoursClosed,
    HoursViewMenu,
    LocationTitle,
    LocationSubtitle,
    LocationAddress,
    LocationOpenMaps,
    FaqTitle,
    FooterTagline,
    FooterHoursTitle,
    FooterRights,
    MenuTitle,
    MenuMetaTitle,
    MenuMetaDescription,
    MenuSearchPlaceholder,
    MenuFilterAll,
    MenuFilterPopular,
    MenuFilterVegetarian,
    MenuFilterSpecialty,
    MenuFilterNew,
    MenuFeatured,
    MenuNew,
    MenuNoResults,
    MenuPricePrefix,
    CategoryBreakfast,
    CategoryLunch,
    CategoryDinner,
    CommonLoading,
    CommonError,
    CommonRetry,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 41] = [
        Self::NavHome,
        Self::NavMenu,
        Self::NavLocation,
        Self::HeroSubtitle,
        Self::HeroCtaMenu,
        Self::HeroCtaDirections,
        Self::WhyTitle,
        Self::HoursTitle,
        Self::HoursNow,
        Self::HoursBreakfast,
        Self::HoursLunch,
        Self::HoursDinner,
        Self::HoursClosed,
        Self::HoursViewMenu,
        Self::LocationTitle,
        Self::LocationSubtitle,
        Self::LocationAddress,
        Self::LocationOpenMaps,
        Self::FaqTitle,
        Self::FooterTagline,
        Self::FooterHoursTitle,
        Self::FooterRights,
        Self::MenuTitle,
        Self::MenuMetaTitle,
        Self::MenuMetaDescription,
        Self::MenuSearchPlaceholder,
        Self::MenuFilterAll,
        Self::MenuFilterPopular,
        Self::MenuFilterVegetarian,
        Self::MenuFilterSpecialty,
        Self::MenuFilterNew,
        Self::MenuFeatured,
        Self::MenuNew,
        Self::MenuNoResults,
        Self::MenuPricePrefix,
        Self::CategoryBreakfast,
        Self::CategoryLunch,
        Self::CategoryDinner,
        Self::CommonLoading,
        Self::CommonError,
        Self::CommonRetry,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::NavHome => "nav.home",
            Self::NavMenu => "nav.menu",
            Self::NavLocation => "nav.location",
            Self::HeroSubtitle => "hero.subtitle",
            Self::HeroCtaMenu => "hero.cta_menu",
            Self::HeroCtaDirections => "hero.cta_directions",
            Self::WhyTitle => "why.title",
            Self::HoursTitle => "hours.title",
            Self::HoursNow => "hours.now",
            Self::HoursBreakfast => "hours.breakfast",
            Self::HoursLunch => "hours.lunch",
            Self::HoursDinner => "hours.dinner",
            Self::HoursClosed => "hours.closed",
            Self::HoursViewMenu => "hours.view_menu",
            Self::LocationTitle => "location.title",
            Self::LocationSubtitle => "location.subtitle",
            Self::LocationAddress => "location.address",
            Self::LocationOpenMaps => "location.open_maps",
            Self::FaqTitle => "faq.title",
            Self::FooterTagline => "footer.tagline",
            Self::FooterHoursTitle => "footer.hours_title",
            Self::FooterRights => "footer.rights",
            Self::MenuTitle => "menu_page.title",
            Self::MenuMetaTitle => "menu_page.meta_title",
            Self::MenuMetaDescription => "menu_page.meta_description",
            Self::MenuSearchPlaceholder => "menu_page.search_placeholder",
            Self::MenuFilterAll => "menu_page.filter_all",
            Self::MenuFilterPopular => "menu_page.filter_popular",
            Self::MenuFilterVegetarian => "menu_page.filter_vegetarian",
            Self::MenuFilterSpecialty => "menu_page.filter_specialty",
            Self::MenuFilterNew => "menu_page.filter_new",
            Self::MenuFeatured => "menu_page.featured",
            Self::MenuNew => "menu_page.new",
            Self::MenuNoResults => "menu_page.no_results",
            Self::MenuPricePrefix => "menu_page.price_prefix",
            Self::CategoryBreakfast => "categories.breakfast",
            Self::CategoryLunch => "categories.lunch",
            Self::CategoryDinner => "categories.dinner",
            Self::CommonLoading => "common.loading",
            Self::CommonError => "common.error",
            Self::CommonRetry => "common.retry",
        }
    }

    pub fn period(period: MealPeriod) -> Self {
        match period {
            MealPeriod::Breakfast => Self::HoursBreakfast,
            MealPeriod::Lunch => Self::HoursLunch,
            MealPeriod::Dinner => Self::HoursDinner,
            MealPeriod::Closed => Self::HoursClosed,
        }
    }

    pub fn category(category: MenuCategory) -> Self {
        match category {
            MenuCategory::Breakfast => Self::CategoryBreakfast,
            MenuCategory::Lunch => Self::CategoryLunch,
            MenuCategory::Dinner => Self::CategoryDinner,
        }
    }

    pub fn tag_filter(filter: TagFilter) -> Self {
        match filter {
            TagFilter::All => Self::MenuFilterAll,
            TagFilter::Only(MenuTag::Popular) => Self::MenuFilterPopular,
            TagFilter::Only(MenuTag::Vegetarian) => Self::MenuFilterVegetarian,
            TagFilter::Only(MenuTag::Specialty) => Self::MenuFilterSpecialty,
            TagFilter::Only(MenuTag::New) => Self::MenuFilterNew,
        }
    }
}
