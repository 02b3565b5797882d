//! Manual address entry fragment (postcode lookup bypassed).

use crate::driver::CaseDriver;
use crate::fixtures::Address;
use crate::locator::Locator;
use crate::result::E2eResult;

const CANT_ENTER_POSTCODE: &str = ".manual-link a";
const LINE1: &str = "#address_AddressLine1";
const LINE2: &str = "#address_AddressLine2";
const LINE3: &str = "#address_AddressLine3";
const TOWN: &str = "#address_PostTown";
const POSTCODE: &str = "#address_PostCode";
const COUNTRY: &str = "#address_Country";

/// Enter an address without using the postcode lookup
///
/// # Errors
///
/// Propagates driver failures.
pub async fn enter_address_manually<D: CaseDriver>(
    driver: &mut D,
    address: &Address,
) -> E2eResult<()> {
    driver.click(&Locator::css(CANT_ENTER_POSTCODE)).await?;
    driver
        .fill_field(&Locator::css(LINE1), &address.line1)
        .await?;
    driver
        .fill_field(&Locator::css(LINE2), &address.line2)
        .await?;
    driver
        .fill_field(&Locator::css(LINE3), &address.line3)
        .await?;
    driver.fill_field(&Locator::css(TOWN), &address.town).await?;
    driver
        .fill_field(&Locator::css(POSTCODE), &address.postcode)
        .await?;
    driver
        .fill_field(&Locator::css(COUNTRY), &address.country)
        .await
}
