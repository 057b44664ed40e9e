use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Sedan,
    Suv,
    Performance,
    Electric,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Performance => "Performance",
            Self::Electric => "Electric",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    BestSeller,
    NewArrival,
    Electric,
    TopBought,
    Performance,
    FamilyChoice,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BestSeller => "Best Seller",
            Self::NewArrival => "New Arrival",
            Self::Electric => "Electric",
            Self::TopBought => "Top Bought",
            Self::Performance => "Performance",
            Self::FamilyChoice => "Family Choice",
        };
        write!(f, "{}", name)
    }
}

// the ribbons painted over a card image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    JustAdded,
    TopChoice,
    MostPopular,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Self::JustAdded => "Just Added",
            Self::TopChoice => "Top Choice",
            Self::MostPopular => "Most Popular",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::JustAdded => "badge badge-new",
            Self::TopChoice => "badge badge-choice",
            Self::MostPopular => "badge badge-popular",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarModel {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub price: &'static str,
    pub power: &'static str,
    pub acceleration: &'static str,
    pub image: &'static str,
    pub tags: &'static [Tag],
}

impl CarModel {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    // badge order is fixed regardless of tag order
    pub fn badges(&self) -> Vec<Badge> {
        [
            (Tag::NewArrival, Badge::JustAdded),
            (Tag::BestSeller, Badge::TopChoice),
            (Tag::TopBought, Badge::MostPopular),
        ]
        .into_iter()
        .filter(|(tag, _)| self.has_tag(*tag))
        .map(|(_, badge)| badge)
        .collect()
    }
}

pub static CAR_DATA: &[CarModel] = &[
    CarModel {
        id: "1",
        name: "L-Class Sedan",
        category: Category::Sedan,
        price: "From ₹ 55.00 Lakh",
        power: "190 kW",
        acceleration: "6.0s",
        image: "https://images.unsplash.com/photo-1617788138017-80ad40651399?q=80&w=1000&auto=format&fit=crop",
        tags: &[Tag::BestSeller],
    },
    CarModel {
        id: "2",
        name: "EQS Electric",
        category: Category::Electric,
        price: "From ₹ 1.60 Cr",
        power: "385 kW",
        acceleration: "4.3s",
        image: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?q=80&w=1000&auto=format&fit=crop",
        tags: &[Tag::NewArrival, Tag::Electric],
    },
    CarModel {
        id: "3",
        name: "G-Wagon Beast",
        category: Category::Suv,
        price: "From ₹ 2.55 Cr",
        power: "430 kW",
        acceleration: "4.5s",
        image: "https://images.unsplash.com/photo-1520031441872-265e4ff70366?q=80&w=1000&auto=format&fit=crop",
        tags: &[Tag::TopBought],
    },
    CarModel {
        id: "4",
        name: "AMG GT",
        category: Category::Performance,
        price: "From ₹ 2.70 Cr",
        power: "470 kW",
        acceleration: "3.2s",
        image: "https://images.unsplash.com/photo-1614162692292-7ac56d7f7f1e?q=80&w=1000&auto=format&fit=crop",
        tags: &[Tag::Performance],
    },
    CarModel {
        id: "5",
        name: "GLS SUV",
        category: Category::Suv,
        price: "From ₹ 1.30 Cr",
        power: "243 kW",
        acceleration: "6.1s",
        image: "https://images.unsplash.com/photo-1605559424843-9e4c228bf1c2?q=80&w=1000&auto=format&fit=crop",
        tags: &[Tag::FamilyChoice],
    },
];

// catalog partitions
//
// both predicates are fixed and independent, so a car can land on both shelves.
// results keep catalog order
pub fn recently_added(cars: &[CarModel]) -> Vec<&CarModel> {
    cars.iter()
        .filter(|car| car.has_tag(Tag::NewArrival) || car.id == "4" || car.id == "1")
        .collect()
}

pub fn top_bought(cars: &[CarModel]) -> Vec<&CarModel> {
    cars.iter()
        .filter(|car| {
            car.has_tag(Tag::TopBought)
                || car.has_tag(Tag::BestSeller)
                || car.category == Category::Suv
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShelfKind {
    RecentlyAdded,
    TopBought,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shelf {
    pub kind: ShelfKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub action: &'static str,
}

impl Shelf {
    pub fn cars<'a>(&self, catalog: &'a [CarModel]) -> Vec<&'a CarModel> {
        match self.kind {
            ShelfKind::RecentlyAdded => recently_added(catalog),
            ShelfKind::TopBought => top_bought(catalog),
        }
    }
}

pub const SHELVES: &[Shelf] = &[
    Shelf {
        kind: ShelfKind::RecentlyAdded,
        title: "Recently Added",
        subtitle: "The latest additions to our exclusive fleet.",
        action: "View All",
    },
    Shelf {
        kind: ShelfKind::TopBought,
        title: "Top Bought Models",
        subtitle: "Our most coveted vehicles, chosen by drivers like you.",
        action: "View Ranking",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cars: Vec<&CarModel>) -> Vec<&'static str> {
        cars.into_iter().map(|car| car.id).collect()
    }

    #[test]
    fn recently_added_partition() {
        assert_eq!(ids(recently_added(CAR_DATA)), ["1", "2", "4"]);
    }

    #[test]
    fn top_bought_partition() {
        assert_eq!(ids(top_bought(CAR_DATA)), ["1", "3", "5"]);
    }

    #[test]
    fn partitions_overlap_on_first_car() {
        let recent = ids(recently_added(CAR_DATA));
        let top = ids(top_bought(CAR_DATA));

        let shared: Vec<_> = recent.iter().filter(|id| top.contains(*id)).collect();
        assert_eq!(shared, [&"1"]);
    }

    #[test]
    fn shelves_map_to_partitions() {
        assert_eq!(SHELVES.len(), 2);
        assert_eq!(ids(SHELVES[0].cars(CAR_DATA)), ["1", "2", "4"]);
        assert_eq!(ids(SHELVES[1].cars(CAR_DATA)), ["1", "3", "5"]);
    }

    #[test]
    fn empty_catalog_yields_empty_shelves() {
        assert!(recently_added(&[]).is_empty());
        assert!(top_bought(&[]).is_empty());
    }

    #[test]
    fn badges_follow_tags() {
        assert_eq!(CAR_DATA[0].badges(), [Badge::TopChoice]);
        assert_eq!(CAR_DATA[1].badges(), [Badge::JustAdded]);
        assert_eq!(CAR_DATA[2].badges(), [Badge::MostPopular]);
        assert!(CAR_DATA[3].badges().is_empty());
        assert_eq!(Badge::MostPopular.label(), "Most Popular");
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::Suv.to_string(), "SUV");
        assert_eq!(Tag::NewArrival.to_string(), "New Arrival");
    }
}
