//! Static "why live here" blurbs shown next to a recommendation. Cosmetic only.

const DEFAULT_REASON: &str = "This location provides a good balance of housing costs and job opportunities based on your preferences.";

const CITY_REASONS: &[(&str, &str)] = &[
    ("Atlanta, GA", "Atlanta offers a strong job market, particularly in tech and finance, with a reasonable cost of living compared to other major cities. The city boasts diverse neighborhoods, rich cultural attractions, and excellent food scene."),
    ("Austin, TX", "Austin combines a thriving tech scene with a vibrant cultural atmosphere. The city is known for its strong job growth, no state income tax, and a reputation for quality of life with numerous outdoor activities."),
    ("Houston, TX", "Houston provides exceptional value with its combination of job opportunities and affordable housing. The city offers diverse communities, world-class dining, no state income tax, and a growing economy centered on energy, healthcare, and aerospace."),
    ("Chicago, IL", "Chicago delivers big-city amenities with more reasonable living costs than coastal cities. It features world-class dining, diverse neighborhoods, excellent public transportation, and abundant cultural institutions and entertainment options."),
    ("Philadelphia, PA", "Philadelphia combines historical charm with modern urban living at a more affordable price point than nearby NYC. The city offers walkable neighborhoods, diverse culinary scene, and proximity to other East Coast hubs."),
    ("New York, NY", "New York City offers unparalleled career opportunities across industries with exceptional cultural amenities, diverse communities, and comprehensive public transportation. Despite high costs, it delivers a unique urban experience."),
    ("San Francisco, CA", "San Francisco remains a global tech hub with some of the highest salaries in the country. The city features breathtaking views, diverse neighborhoods, excellent food, and access to beautiful outdoor spaces despite its high cost of living."),
    ("Seattle, WA", "Seattle combines a strong tech job market with natural beauty and outdoor recreation. The city offers a thriving cultural scene, mild climate, and excellent public amenities despite the rainy reputation."),
    ("Washington, DC", "Washington DC features a stable job market with government and related industries, excellent public transportation, diverse neighborhoods, and unmatched access to free museums and cultural institutions."),
    ("Denver, CO", "Denver provides an exceptional balance of urban amenities and outdoor lifestyle. The city features a strong job market, especially in tech and healthcare, with 300+ days of sunshine and proximity to world-class mountain recreation."),
    ("Boston, MA", "Boston excels in education, healthcare, and technology sectors with historic charm, walkable neighborhoods, and excellent public transportation. The city offers cultural richness despite higher living costs."),
    ("Dallas, TX", "Dallas offers a robust job market with no state income tax and a lower cost of living than many major cities. The metropolitan area provides diverse communities, excellent dining, and a central location for business travel."),
    ("Los Angeles, CA", "Los Angeles combines career opportunities in entertainment, tech, and design with year-round sunshine and diverse neighborhoods. The sprawling city offers something for everyone despite traffic challenges."),
    ("Herndon, VA", "Herndon offers excellent proximity to the Dulles Technology Corridor, making it ideal for tech professionals. With access to Washington DC metro area jobs, good schools, and lower housing costs than nearby Arlington, it's a practical choice for professionals."),
    ("Arlington, VA", "Arlington provides exceptional access to government and contractor jobs with an extensive public transit system connecting to DC. The area features excellent schools, vibrant urban villages, and numerous dining and entertainment options."),
    ("San Diego, CA", "San Diego offers an unbeatable combination of year-round perfect weather, beautiful beaches, and a growing tech and biotech industry. The city provides a more relaxed lifestyle than other California tech hubs while maintaining excellent career opportunities."),
    ("Rockland, MA", "Rockland combines affordable living with proximity to the Boston metro job market. It offers a small-town New England feel with historic charm while providing access to city amenities and coastal recreation options."),
];

/// Looks up the blurb for a `"City, State"` key, falling back to a generic reason.
pub fn city_reason(city: &str, state: &str) -> &'static str {
    let key = format!("{city}, {state}");
    CITY_REASONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, reason)| *reason)
        .unwrap_or(DEFAULT_REASON)
}
