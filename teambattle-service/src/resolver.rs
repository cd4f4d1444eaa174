use teambattle::{
    EffectivenessResolver,
    LookupError,
    validate_factor,
};
use teambattle_data::DataStore;
use uuid::Uuid;

/// An [`EffectivenessResolver`] that looks up factors in a [`DataStore`].
///
/// Every failed lookup is logged here, since the battle engine silently treats it as neutral.
pub struct StoreResolver<'d, D: ?Sized> {
    data: &'d D,
}

impl<'d, D> StoreResolver<'d, D>
where
    D: DataStore + ?Sized,
{
    pub fn new(data: &'d D) -> Self {
        Self { data }
    }

    fn lookup(&self, attacker: &Uuid, defender: &Uuid) -> Result<f32, LookupError> {
        let factor = self
            .data
            .get_type_factor(attacker, defender)
            .map_err(LookupError::Unavailable)?
            .ok_or(LookupError::UnknownPairing {
                attacker: *attacker,
                defender: *defender,
            })?;
        validate_factor(factor)
    }
}

impl<D> EffectivenessResolver for StoreResolver<'_, D>
where
    D: DataStore + ?Sized,
{
    fn factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<f32, LookupError> {
        self.lookup(attacker, defender).inspect_err(|err| match err {
            LookupError::Unavailable(source) => {
                log::warn!("Using neutral effectiveness for {attacker} against {defender}: {err}: {source:#}")
            }
            _ => log::warn!("Using neutral effectiveness for {attacker} against {defender}: {err}"),
        })
    }
}
