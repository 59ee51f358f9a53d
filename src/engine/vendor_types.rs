use crate::models::vendor::ServiceType;

const COMMON_TYPES: [ServiceType; 4] = [
    ServiceType::Catering,
    ServiceType::Decoration,
    ServiceType::Photography,
    ServiceType::Venue,
];

// Which vendor categories an event of the given type shops for. Unknown
// event types fall back to the common set.
pub fn vendor_types_for_event(event_type: &str) -> Vec<ServiceType> {
    match event_type {
        "wedding" => with_common(&[ServiceType::Entertainment, ServiceType::Transportation]),
        "corporate" => with_common(&[ServiceType::Entertainment, ServiceType::Technology]),
        "birthday" => with_common(&[ServiceType::Entertainment]),
        "conference" => vec![
            ServiceType::Venue,
            ServiceType::Catering,
            ServiceType::Technology,
            ServiceType::Photography,
        ],
        _ => COMMON_TYPES.to_vec(),
    }
}

fn with_common(extra: &[ServiceType]) -> Vec<ServiceType> {
    let mut types = COMMON_TYPES.to_vec();
    types.extend_from_slice(extra);
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_set_is_exact() {
        let types = vendor_types_for_event("conference");

        assert_eq!(
            types,
            vec![
                ServiceType::Venue,
                ServiceType::Catering,
                ServiceType::Technology,
                ServiceType::Photography,
            ]
        );
    }

    #[test]
    fn test_wedding_extends_common_set() {
        let types = vendor_types_for_event("wedding");

        assert_eq!(types.len(), 6);
        assert!(types.contains(&ServiceType::Entertainment));
        assert!(types.contains(&ServiceType::Transportation));
        assert!(!types.contains(&ServiceType::Technology));
    }

    #[test]
    fn test_unknown_event_type_falls_back_to_common() {
        let types = vendor_types_for_event("quinceanera");

        assert_eq!(
            types,
            vec![
                ServiceType::Catering,
                ServiceType::Decoration,
                ServiceType::Photography,
                ServiceType::Venue,
            ]
        );
    }
}
