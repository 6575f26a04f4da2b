use crate::DeviceCategory;

use std::str::FromStr;

#[test]
fn test_device_category_as_str() {
    assert_eq!(DeviceCategory::Mobile.as_str(), "mobile");
    assert_eq!(DeviceCategory::Mnk.as_str(), "mnk");
}

#[test]
fn test_device_category_from_str() {
    assert_eq!(
        DeviceCategory::from_str("mobile").unwrap(),
        DeviceCategory::Mobile
    );
    assert_eq!(DeviceCategory::from_str("mnk").unwrap(), DeviceCategory::Mnk);
    assert!(DeviceCategory::from_str("tablet").is_err());
}

#[test]
fn test_device_category_default() {
    assert_eq!(DeviceCategory::default(), DeviceCategory::Mobile);
}

#[test]
fn test_device_category_toggled_flips_back_and_forth() {
    assert_eq!(DeviceCategory::Mobile.toggled(), DeviceCategory::Mnk);
    assert_eq!(DeviceCategory::Mnk.toggled(), DeviceCategory::Mobile);
    assert_eq!(
        DeviceCategory::Mobile.toggled().toggled(),
        DeviceCategory::Mobile
    );
}
