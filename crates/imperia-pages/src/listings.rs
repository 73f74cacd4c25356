//! Static property listings.
//!
//! Listings are compiled into the build — the properties catalogue changes
//! with releases, not at runtime — so the screens read them straight from
//! these tables.

/// A payment plan for one unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
	pub title: &'static str,
	pub price: &'static str,
	pub installments: &'static [&'static str],
}

/// One purchasable unit in a development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
	/// Stable identifier used in `/property/{id}` URLs.
	pub id: &'static str,
	pub title: &'static str,
	pub project: &'static str,
	pub description: &'static str,
	pub location: &'static str,
	pub avg_price: &'static str,
	pub main_image: &'static str,
	pub flyer: Option<&'static str>,
	pub photos: &'static [&'static str],
	pub highlights: &'static [&'static str],
	pub pricing_plans: &'static [PricingPlan],
}

/// A development promoted on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
	pub title: &'static str,
	pub description: &'static str,
	pub location: &'static str,
	pub image: &'static str,
}

const SHARED_HIGHLIGHTS: &[&str] = &[
	"Flexible payment plans",
	"Prime locations",
	"Modern Interiors",
	"Secure Environment",
	"Family-friendly amenities",
	"12% annual ROI",
	"24/7 security",
	"25 floors of modern living",
];

const LISTINGS: &[Listing] = &[
	Listing {
		id: "emerald-1-bedroom",
		title: "1 BEDROOM APARTMENT",
		project: "Emerald Springs Apartment",
		description: "A thoughtfully designed space combining comfort, privacy, and style ideal \
			for individuals or couples seeking modern living in a serene environment.",
		location: "Westland, Nairobi, Kenya",
		avg_price: "9.28M KSH ($72,000)",
		main_image: "/assets/emerald/one-bed-main.webp",
		flyer: Some("/assets/emerald/one-bed-flyer.webp"),
		photos: &[
			"/assets/emerald/one-bed-1.webp",
			"/assets/emerald/one-bed-2.webp",
			"/assets/emerald/one-bed-3.webp",
			"/assets/emerald/one-bed-4.webp",
		],
		highlights: SHARED_HIGHLIGHTS,
		pricing_plans: &[],
	},
	Listing {
		id: "emerald-2-bedroom",
		title: "2 BEDROOM APARTMENT",
		project: "Emerald Springs Apartment",
		description: "Spacious and elegantly designed, this two-bedroom apartment offers the \
			perfect balance of privacy and shared living, ideal for small families, young \
			professionals, or savvy investors.",
		location: "Westland, Nairobi, Kenya",
		avg_price: "15.2M KSH ($120,000)",
		main_image: "/assets/emerald/two-bed-main.webp",
		flyer: Some("/assets/emerald/two-bed-flyer.webp"),
		photos: &[
			"/assets/emerald/two-bed-1.webp",
			"/assets/emerald/two-bed-2.webp",
			"/assets/emerald/two-bed-3.webp",
			"/assets/emerald/two-bed-4.webp",
		],
		highlights: SHARED_HIGHLIGHTS,
		pricing_plans: &[],
	},
	Listing {
		id: "oak-1-bedroom",
		title: "1 BEDROOM APARTMENT",
		project: "Oak West Residency",
		description: "A thoughtfully designed space combining comfort, privacy, and style ideal \
			for individuals or couples seeking modern living in a serene environment.",
		location: "Westland, Nairobi, Kenya",
		avg_price: "1 bedroom (58 SQM) - 8.1M KSH",
		main_image: "/assets/oak/one-bed-main.webp",
		flyer: None,
		photos: &[
			"/assets/oak/one-bed-1.webp",
			"/assets/oak/one-bed-2.webp",
			"/assets/oak/one-bed-3.webp",
			"/assets/oak/one-bed-4.webp",
		],
		highlights: SHARED_HIGHLIGHTS,
		pricing_plans: &[
			PricingPlan {
				title: "1 BEDROOM APARTMENT",
				price: "8.1M KSH",
				installments: &[
					"30% - 2,640,000 (deposit)",
					"12.5% - 1,100,000 (6 months)",
					"12.5% - 1,100,000 (12 months)",
					"20% - 1,760,000 (upon completion November 2027)",
				],
			},
			PricingPlan {
				title: "1 BEDROOM APARTMENT PLUS STUDY",
				price: "8.8M KSH",
				installments: &[
					"30% - 2,640,000 (deposit)",
					"12.5% - 1,100,000 (6 months)",
					"12.5% - 1,100,000 (12 months)",
					"20% - 1,760,000 (upon completion November 2027)",
				],
			},
		],
	},
	Listing {
		id: "oak-2-bedroom",
		title: "2 BEDROOM APARTMENT",
		project: "Oak West Residency",
		description: "A thoughtfully designed space combining comfort, privacy, and style ideal \
			for individuals or couples seeking modern living in a serene environment.",
		location: "Westland, Nairobi, Kenya",
		avg_price: "KSH 12.7M ($100,000)",
		main_image: "/assets/oak/two-bed-main.webp",
		flyer: None,
		photos: &[
			"/assets/oak/two-bed-1.webp",
			"/assets/oak/two-bed-2.webp",
			"/assets/oak/two-bed-3.webp",
			"/assets/oak/two-bed-4.webp",
		],
		highlights: SHARED_HIGHLIGHTS,
		pricing_plans: &[PricingPlan {
			title: "2 BEDROOM FLOOR 12 TO 19",
			price: "14.7M KSH",
			installments: &[
				"20% - 2,940,000 (deposit)",
				"15% - 2,205,000 (6 months)",
				"15% - 2,205,000 (12 months)",
				"20% - 2,940,000 (upon completion November 2027)",
			],
		}],
	},
	Listing {
		id: "oak-3-bedroom",
		title: "3 BEDROOM APARTMENT",
		project: "Oak West Residency",
		description: "A thoughtfully designed space combining comfort, privacy, and style ideal \
			for individuals or couples seeking modern living in a serene environment.",
		location: "Westland, Nairobi, Kenya",
		avg_price: "KSH 20.2M ($160,000)",
		main_image: "/assets/oak/three-bed-main.webp",
		flyer: None,
		photos: &[
			"/assets/oak/three-bed-1.webp",
			"/assets/oak/three-bed-2.webp",
			"/assets/oak/three-bed-3.webp",
			"/assets/oak/three-bed-4.webp",
		],
		highlights: SHARED_HIGHLIGHTS,
		pricing_plans: &[PricingPlan {
			title: "3 BEDROOM FLOOR 12 TO 19",
			price: "20.2M KSH",
			installments: &[
				"20% - 4,040,000 (deposit)",
				"15% - 3,030,000 (6 months)",
				"15% - 3,030,000 (12 months)",
				"20% - 4,040,000 (upon completion November 2027)",
			],
		}],
	},
];

const FEATURED: &[FeaturedProject] = &[
	FeaturedProject {
		title: "EMERALD SPRINGS APARTMENT",
		description: "Flexible payment of up to 30 months",
		location: "Westland, Nairobi",
		image: "/assets/featured/emerald.webp",
	},
	FeaturedProject {
		title: "OAK WEST RESIDENCY",
		description: "Flexible payment of up to 30 months",
		location: "Westland, Nairobi",
		image: "/assets/featured/oak.webp",
	},
];

/// All listings, in catalogue order.
pub fn all() -> &'static [Listing] {
	LISTINGS
}

/// Looks up a listing by its URL id.
pub fn by_id(id: &str) -> Option<&'static Listing> {
	LISTINGS.iter().find(|listing| listing.id == id)
}

/// The developments promoted on the home screen.
pub fn featured() -> &'static [FeaturedProject] {
	FEATURED
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_catalogue_is_populated() {
		assert_eq!(all().len(), 5);
		assert_eq!(featured().len(), 2);
	}

	#[test]
	fn test_lookup_by_id() {
		let listing = by_id("oak-1-bedroom").unwrap();
		assert_eq!(listing.project, "Oak West Residency");
		assert_eq!(listing.pricing_plans.len(), 2);
	}

	#[test]
	fn test_unknown_id_is_none() {
		assert!(by_id("penthouse-99").is_none());
	}

	#[test]
	fn test_ids_are_unique() {
		let mut ids: Vec<_> = all().iter().map(|listing| listing.id).collect();
		ids.sort();
		let len = ids.len();
		ids.dedup();
		assert_eq!(ids.len(), len);
	}
}
