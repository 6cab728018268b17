//! Well-known stat identifiers.
//!
//! Names match the host game's stat def names so content files and persisted
//! records can refer to them verbatim.

use super::StatId;

// Protection and comfort
pub const ARMOR_RATING_SHARP: StatId = StatId::from_static("ArmorRating_Sharp");
pub const ARMOR_RATING_BLUNT: StatId = StatId::from_static("ArmorRating_Blunt");
pub const INSULATION_COLD: StatId = StatId::from_static("Insulation_Cold");
pub const INSULATION_HEAT: StatId = StatId::from_static("Insulation_Heat");
pub const COMFY_TEMPERATURE_MIN: StatId = StatId::from_static("ComfyTemperatureMin");
pub const COMFY_TEMPERATURE_MAX: StatId = StatId::from_static("ComfyTemperatureMax");

// Movement and general work
pub const MOVE_SPEED: StatId = StatId::from_static("MoveSpeed");
pub const CARRYING_CAPACITY: StatId = StatId::from_static("CarryingCapacity");
pub const WORK_SPEED_GLOBAL: StatId = StatId::from_static("WorkSpeedGlobal");

// Crafting
pub const RESEARCH_SPEED: StatId = StatId::from_static("ResearchSpeed");
pub const STONECUTTING_SPEED: StatId = StatId::from_static("StonecuttingSpeed");
pub const SMELTING_SPEED: StatId = StatId::from_static("SmeltingSpeed");
pub const SCULPTING_SPEED: StatId = StatId::from_static("SculptingSpeed");
pub const TAILORING_SPEED: StatId = StatId::from_static("TailoringSpeed");
pub const SMITHING_SPEED: StatId = StatId::from_static("SmithingSpeed");

// Plants and mining
pub const HARVEST_FAIL_CHANCE: StatId = StatId::from_static("HarvestFailChance");
pub const PLANT_WORK_SPEED: StatId = StatId::from_static("PlantWorkSpeed");
pub const MINING_SPEED: StatId = StatId::from_static("MiningSpeed");

// Construction
pub const FIX_BROKEN_DOWN_BUILDING_FAIL_CHANCE: StatId =
    StatId::from_static("FixBrokenDownBuildingFailChance");
pub const CONSTRUCTION_SPEED: StatId = StatId::from_static("ConstructionSpeed");
pub const SMOOTHING_SPEED: StatId = StatId::from_static("SmoothingSpeed");

// Hunting
pub const AIMING_DELAY_FACTOR: StatId = StatId::from_static("AimingDelayFactor");
pub const SHOOTING_ACCURACY: StatId = StatId::from_static("ShootingAccuracy");

// Cooking
pub const COOK_SPEED: StatId = StatId::from_static("CookSpeed");
pub const FOOD_POISON_CHANCE: StatId = StatId::from_static("FoodPoisonChance");
pub const BREWING_SPEED: StatId = StatId::from_static("BrewingSpeed");
pub const BUTCHERY_FLESH_SPEED: StatId = StatId::from_static("ButcheryFleshSpeed");
pub const BUTCHERY_FLESH_EFFICIENCY: StatId = StatId::from_static("ButcheryFleshEfficiency");

// Animals
pub const TAME_ANIMAL_CHANCE: StatId = StatId::from_static("TameAnimalChance");
pub const TRAIN_ANIMAL_CHANCE: StatId = StatId::from_static("TrainAnimalChance");

// Social
pub const SOCIAL_IMPACT: StatId = StatId::from_static("SocialImpact");
pub const RECRUIT_PRISONER_CHANCE: StatId = StatId::from_static("RecruitPrisonerChance");
pub const GIFT_IMPACT: StatId = StatId::from_static("GiftImpact");
pub const TRADE_PRICE_IMPROVEMENT: StatId = StatId::from_static("TradePriceImprovement");

// Medical
pub const MEDICAL_OPERATION_SPEED: StatId = StatId::from_static("MedicalOperationSpeed");
pub const SURGERY_SUCCESS_CHANCE: StatId = StatId::from_static("SurgerySuccessChance");
pub const BASE_HEALING_QUALITY: StatId = StatId::from_static("BaseHealingQuality");
pub const HEALING_SPEED: StatId = StatId::from_static("HealingSpeed");
