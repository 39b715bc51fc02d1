//! Emergency stop.

use std::sync::LazyLock;

use solwiz_ir::{ContractBuilder, FunctionRegistry, FunctionSpec, Result, Visibility};
use solwiz_options::Access;

use crate::{access::set_access_control, common::openzeppelin};

static FUNCTIONS: LazyLock<FunctionRegistry> = LazyLock::new(|| {
    FunctionRegistry::new()
        .define("pause", FunctionSpec::new("pause", Visibility::Public))
        .define("unpause", FunctionSpec::new("unpause", Visibility::Public))
});

/// Add `Pausable`, guard `pausable` with `whenNotPaused` and expose
/// privileged `pause`/`unpause`.
pub fn add_pausable(
    c: &mut ContractBuilder,
    access: Access,
    pausable: &[&FunctionSpec],
) -> Result<()> {
    c.add_parent(openzeppelin("Pausable", "security/Pausable.sol"), vec![])?;
    for function in pausable {
        c.add_modifier("whenNotPaused", function);
    }

    let pause = FUNCTIONS.get("pause")?;
    let unpause = FUNCTIONS.get("unpause")?;
    set_access_control(c, &[pause, unpause], access, "PAUSER")?;
    c.add_function_code("_pause();", pause)?;
    c.add_function_code("_unpause();", unpause)?;
    Ok(())
}
