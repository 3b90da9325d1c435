use br_mechanics::{Effect, Position, RollConfig, RollRequest, perform_roll};

pub fn run(
    config: &RollConfig,
    dice: i32,
    attribute: &str,
    position: Option<&str>,
    effect: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let position = match position {
        Some(name) => name.parse::<Position>().map_err(|e| e.to_string())?,
        None => config.position,
    };
    let effect = match effect {
        Some(name) => name.parse::<Effect>().map_err(|e| e.to_string())?,
        None => config.effect,
    };

    let request = RollRequest::new(dice)
        .with_attribute(attribute)
        .with_position(position)
        .with_effect(effect);

    let mut roller = config.roller();
    let report = perform_roll(&request, &mut roller).map_err(|e| e.to_string())?;
    super::print_report(&report, json)
}
