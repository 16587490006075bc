//! The built-in standard template library.
//!
//! A curated slice of an Unreal-style node set: entry events, input events,
//! flow-control macros, gameplay functions, pure math helpers, and variable
//! accessors. Pin names, defaults, and descriptions follow the editor's
//! conventions (`execute`/`then` exec pairs on impure functions, `ReturnValue`
//! data outputs, macro pins like `LoopBody`/`Completed`).

use super::template::{NodeTemplate, TemplatePin as P};
use crate::graph::NodeType::*;
use crate::graph::PinType::*;

pub fn standard_templates() -> Vec<NodeTemplate> {
    vec![
        // --- Entry events ---
        NodeTemplate::new(
            "EventBeginPlay",
            "Event BeginPlay",
            Event,
            "Event BeginPlay (/Script/BlueprintGraph.K2Node_Event)",
            vec![P::output("then", Exec)],
        ),
        NodeTemplate::new(
            "EventTick",
            "Event Tick",
            Event,
            "Event Tick (/Script/BlueprintGraph.K2Node_Event)",
            vec![
                P::output("then", Exec),
                P::output("Delta Seconds", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "EventActorBeginOverlap",
            "Event ActorBeginOverlap",
            Event,
            "Event ActorBeginOverlap (/Script/BlueprintGraph.K2Node_Event)",
            vec![P::output("then", Exec), P::output("OtherActor", Object)],
        ),
        NodeTemplate::new(
            "CustomEvent",
            "Custom Event",
            Function,
            "Custom Event (/Script/BlueprintGraph.K2Node_CustomEvent)",
            vec![P::output("OutputDelegate", Delegate), P::output("then", Exec)],
        ),
        // --- Input events ---
        NodeTemplate::new(
            "InputActionJump",
            "InputAction Jump",
            InputEvent,
            "InputAction Jump (/Script/BlueprintGraph.K2Node_InputAction)",
            vec![
                P::output("Pressed", Exec),
                P::output("Released", Exec),
                P::output("Key", Struct).with_default("None"),
            ],
        ),
        NodeTemplate::new(
            "InputAxisMoveForward",
            "InputAxis MoveForward",
            InputEvent,
            "InputAxis MoveForward (/Script/BlueprintGraph.K2Node_InputAxisEvent)",
            vec![
                P::output("then", Exec),
                P::output("AxisValue", Float).with_default("0.0"),
            ],
        ),
        // --- Flow control ---
        NodeTemplate::new(
            "Branch",
            "Branch",
            FlowControl,
            "Branch (/Script/BlueprintGraph.K2Node_IfThenElse)",
            vec![
                P::input("execute", Exec),
                P::input("Condition", Boolean).with_default("true"),
                P::output("then", Exec),
                P::output("else", Exec),
            ],
        ),
        NodeTemplate::new(
            "Sequence",
            "Sequence",
            FlowControl,
            "Sequence (/Script/BlueprintGraph.K2Node_ExecutionSequence)",
            vec![
                P::input("execute", Exec),
                P::output("then_0", Exec),
                P::output("then_1", Exec),
                P::output("then_2", Exec),
            ],
        ),
        NodeTemplate::new(
            "Gate",
            "Gate",
            Macro,
            "Gate (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("Enter", Exec),
                P::input("Open", Exec),
                P::input("Close", Exec),
                P::input("Toggle", Exec),
                P::input("Start Closed", Boolean).with_default("false"),
                P::output("Exit", Exec),
            ],
        ),
        NodeTemplate::new(
            "DoOnce",
            "Do Once",
            Macro,
            "Do Once (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("execute", Exec),
                P::input("Reset", Exec),
                P::input("Start Closed", Boolean).with_default("false"),
                P::output("Completed", Exec),
            ],
        ),
        NodeTemplate::new(
            "DoN",
            "Do N",
            Macro,
            "Do N (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("Enter", Exec),
                P::input("N", Integer).with_default("1"),
                P::input("Reset", Exec),
                P::output("Exit", Exec),
                P::output("Counter", Integer).with_default("0"),
            ],
        ),
        NodeTemplate::new(
            "FlipFlop",
            "FlipFlop",
            Macro,
            "FlipFlop (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("execute", Exec),
                P::output("A", Exec),
                P::output("B", Exec),
                P::output("IsA", Boolean).with_default("true"),
            ],
        ),
        NodeTemplate::new(
            "ForLoop",
            "For Loop",
            Macro,
            "For Loop (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("execute", Exec),
                P::input("First Index", Integer).with_default("0"),
                P::input("Last Index", Integer).with_default("0"),
                P::output("LoopBody", Exec),
                P::output("Index", Integer).with_default("0"),
                P::output("Completed", Exec),
            ],
        ),
        NodeTemplate::new(
            "ForEachLoop",
            "For Each Loop",
            Macro,
            "For Each Loop (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("Exec", Exec),
                P::input("Array", Struct),
                P::output("LoopBody", Exec),
                P::output("Array Element", Struct),
                P::output("Array Index", Integer).with_default("0"),
                P::output("Completed", Exec),
            ],
        ),
        NodeTemplate::new(
            "WhileLoop",
            "While Loop",
            Macro,
            "While Loop (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("execute", Exec),
                P::input("Condition", Boolean).with_default("false"),
                P::output("LoopBody", Exec),
                P::output("Completed", Exec),
            ],
        ),
        NodeTemplate::new(
            "IsValid",
            "Is Valid",
            Macro,
            "Is Valid (/Script/BlueprintGraph.K2Node_MacroInstance)",
            vec![
                P::input("execute", Exec),
                P::input("InputObject", Object),
                P::output("Is Valid", Exec),
                P::output("Is Not Valid", Exec),
            ],
        ),
        // --- Gameplay functions ---
        NodeTemplate::new(
            "PrintString",
            "Print String",
            Function,
            "Print String (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("self", Object),
                P::input("WorldContextObject", Object),
                P::input("InString", String).with_default("Hello"),
                P::input("bPrintToScreen", Boolean).with_default("true"),
                P::input("bPrintToLog", Boolean).with_default("true"),
                P::input("Duration", Float).with_default("2.000000"),
                P::input("Key", Name).with_default("None"),
            ],
        ),
        NodeTemplate::new(
            "Delay",
            "Delay",
            Function,
            "Delay (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("WorldContextObject", Object),
                P::input("Duration", Float).with_default("0.2"),
            ],
        ),
        NodeTemplate::new(
            "SpawnActorFromClass",
            "SpawnActor From Class",
            Function,
            "SpawnActor From Class (/Script/BlueprintGraph.K2Node_SpawnActorFromClass)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("Class", Class),
                P::input("SpawnTransform", Struct),
                P::input("CollisionHandlingOverride", Byte).with_default("Default"),
                P::output("ReturnValue", Object),
            ],
        ),
        NodeTemplate::new(
            "DestroyActor",
            "DestroyActor",
            Function,
            "DestroyActor (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("Target", Object),
            ],
        ),
        NodeTemplate::new(
            "SetActorLocation",
            "SetActorLocation",
            Function,
            "SetActorLocation (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("self", Object),
                P::input("NewLocation", Vector).with_default("0, 0, 0"),
                P::input("bSweep", Boolean).with_default("false"),
                P::input("bTeleport", Boolean).with_default("false"),
                P::output("SweepHitResult", Struct),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "AddActorLocalOffset",
            "AddActorLocalOffset",
            Function,
            "AddActorLocalOffset (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("self", Object),
                P::input("DeltaLocation", Vector).with_default("0, 0, 0"),
                P::input("bSweep", Boolean).with_default("false"),
                P::input("bTeleport", Boolean).with_default("false"),
                P::output("SweepHitResult", Struct),
            ],
        ),
        NodeTemplate::new(
            "LineTraceByChannel",
            "LineTraceByChannel",
            Function,
            "LineTraceByChannel (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("WorldContextObject", Object),
                P::input("Start", Vector).with_default("0, 0, 0"),
                P::input("End", Vector).with_default("0, 0, 0"),
                P::input("TraceChannel", Byte).with_default("Visibility"),
                P::input("bTraceComplex", Boolean).with_default("false"),
                P::input("DrawDebugType", Byte).with_default("None"),
                P::output("OutHit", Struct),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "ApplyDamage",
            "Apply Damage",
            Function,
            "Apply Damage (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("DamagedActor", Object),
                P::input("BaseDamage", Float).with_default("0.0"),
                P::input("EventInstigator", Object),
                P::input("DamageCauser", Object),
                P::input("DamageTypeClass", Class),
                P::output("ReturnValue", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "PlaySoundAtLocation",
            "Play Sound at Location",
            Function,
            "Play Sound at Location (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("WorldContextObject", Object),
                P::input("Sound", Object),
                P::input("Location", Vector).with_default("0, 0, 0"),
                P::input("VolumeMultiplier", Float).with_default("1.0"),
                P::input("PitchMultiplier", Float).with_default("1.0"),
            ],
        ),
        NodeTemplate::new(
            "SetTimerByFunctionName",
            "Set Timer by Function Name",
            Function,
            "Set Timer by Function Name (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("Object", Object),
                P::input("FunctionName", Name).with_default("None"),
                P::input("Time", Float).with_default("0.2"),
                P::input("bLooping", Boolean).with_default("false"),
                P::output("ReturnValue", Struct),
            ],
        ),
        // --- Pure functions ---
        NodeTemplate::new(
            "GetActorLocation",
            "GetActorLocation",
            Function,
            "GetActorLocation (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![P::input("self", Object), P::output("ReturnValue", Vector)],
        ),
        NodeTemplate::new(
            "GetActorRotation",
            "GetActorRotation",
            Function,
            "GetActorRotation (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![P::input("self", Object), P::output("ReturnValue", Rotator)],
        ),
        NodeTemplate::new(
            "GetPlayerCharacter",
            "Get Player Character",
            Function,
            "Get Player Character (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("WorldContextObject", Object),
                P::input("PlayerIndex", Integer).with_default("0"),
                P::output("ReturnValue", Object),
            ],
        ),
        NodeTemplate::new(
            "GetPlayerController",
            "Get Player Controller",
            Function,
            "Get Player Controller (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("WorldContextObject", Object),
                P::input("PlayerIndex", Integer).with_default("0"),
                P::output("ReturnValue", Object),
            ],
        ),
        NodeTemplate::new(
            "Add_IntInt",
            "+",
            Function,
            "+ (/Script/BlueprintGraph.K2Node_CommutativeAssociativeBinaryOperator)",
            vec![
                P::input("A", Integer).with_default("0"),
                P::input("B", Integer).with_default("0"),
                P::output("ReturnValue", Integer).with_default("0"),
            ],
        ),
        NodeTemplate::new(
            "Subtract_IntInt",
            "-",
            Function,
            "- (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("A", Integer).with_default("0"),
                P::input("B", Integer).with_default("0"),
                P::output("ReturnValue", Integer).with_default("0"),
            ],
        ),
        NodeTemplate::new(
            "Multiply_IntInt",
            "*",
            Function,
            "* (/Script/BlueprintGraph.K2Node_CommutativeAssociativeBinaryOperator)",
            vec![
                P::input("A", Integer).with_default("0"),
                P::input("B", Integer).with_default("0"),
                P::output("ReturnValue", Integer).with_default("0"),
            ],
        ),
        NodeTemplate::new(
            "Add_FloatFloat",
            "+",
            Function,
            "+ (/Script/BlueprintGraph.K2Node_CommutativeAssociativeBinaryOperator)",
            vec![
                P::input("A", Float).with_default("0.0"),
                P::input("B", Float).with_default("0.0"),
                P::output("ReturnValue", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "Multiply_FloatFloat",
            "*",
            Function,
            "* (/Script/BlueprintGraph.K2Node_CommutativeAssociativeBinaryOperator)",
            vec![
                P::input("A", Float).with_default("0.0"),
                P::input("B", Float).with_default("0.0"),
                P::output("ReturnValue", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "Greater_FloatFloat",
            ">",
            Function,
            "> (/Script/BlueprintGraph.K2Node_PromotableOperator)",
            vec![
                P::input("A", Float).with_default("0.0"),
                P::input("B", Float).with_default("0.0"),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "Less_FloatFloat",
            "<",
            Function,
            "< (/Script/BlueprintGraph.K2Node_PromotableOperator)",
            vec![
                P::input("A", Float).with_default("0.0"),
                P::input("B", Float).with_default("0.0"),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "EqualEqual_IntInt",
            "==",
            Function,
            "== (/Script/BlueprintGraph.K2Node_PromotableOperator)",
            vec![
                P::input("A", Integer).with_default("0"),
                P::input("B", Integer).with_default("0"),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "BooleanAND",
            "AND",
            Function,
            "AND (/Script/BlueprintGraph.K2Node_CommutativeAssociativeBinaryOperator)",
            vec![
                P::input("A", Boolean).with_default("false"),
                P::input("B", Boolean).with_default("false"),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "BooleanOR",
            "OR",
            Function,
            "OR (/Script/BlueprintGraph.K2Node_CommutativeAssociativeBinaryOperator)",
            vec![
                P::input("A", Boolean).with_default("false"),
                P::input("B", Boolean).with_default("false"),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "BooleanNOT",
            "NOT",
            Function,
            "NOT (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("A", Boolean).with_default("false"),
                P::output("ReturnValue", Boolean).with_default("false"),
            ],
        ),
        NodeTemplate::new(
            "RandomFloatInRange",
            "Random Float in Range",
            Function,
            "Random Float in Range (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("Min", Float).with_default("0.0"),
                P::input("Max", Float).with_default("1.0"),
                P::output("ReturnValue", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "RandomIntegerInRange",
            "Random Integer in Range",
            Function,
            "Random Integer in Range (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("Min", Integer).with_default("0"),
                P::input("Max", Integer).with_default("100"),
                P::output("ReturnValue", Integer).with_default("0"),
            ],
        ),
        NodeTemplate::new(
            "MakeVector",
            "Make Vector",
            Function,
            "Make Vector (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("X", Float).with_default("0.0"),
                P::input("Y", Float).with_default("0.0"),
                P::input("Z", Float).with_default("0.0"),
                P::output("ReturnValue", Vector),
            ],
        ),
        NodeTemplate::new(
            "BreakVector",
            "Break Vector",
            Function,
            "Break Vector (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("InVec", Vector).with_default("0, 0, 0"),
                P::output("X", Float).with_default("0.0"),
                P::output("Y", Float).with_default("0.0"),
                P::output("Z", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "VSize",
            "VectorLength",
            Function,
            "VectorLength (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("A", Vector).with_default("0, 0, 0"),
                P::output("ReturnValue", Float).with_default("0.0"),
            ],
        ),
        NodeTemplate::new(
            "Conv_IntToString",
            "ToString (integer)",
            Function,
            "ToString (integer) (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("InInt", Integer).with_default("0"),
                P::output("ReturnValue", String),
            ],
        ),
        NodeTemplate::new(
            "Conv_FloatToString",
            "ToString (float)",
            Function,
            "ToString (float) (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("InFloat", Float).with_default("0.0"),
                P::output("ReturnValue", String),
            ],
        ),
        NodeTemplate::new(
            "Concat_StrStr",
            "Append",
            Function,
            "Append (/Script/BlueprintGraph.K2Node_CallFunction)",
            vec![
                P::input("A", String),
                P::input("B", String),
                P::output("ReturnValue", String),
            ],
        ),
        // --- Variable accessors ---
        NodeTemplate::new(
            "GetHealth",
            "Get Health",
            VariableGet,
            "Get Health (/Script/BlueprintGraph.K2Node_VariableGet)",
            vec![P::output("Health", Float).with_default("100.0")],
        ),
        NodeTemplate::new(
            "SetHealth",
            "Set Health",
            VariableSet,
            "Set Health (/Script/BlueprintGraph.K2Node_VariableSet)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("Health", Float).with_default("100.0"),
                P::output("Output Get", Float).with_default("100.0"),
            ],
        ),
        NodeTemplate::new(
            "GetScore",
            "Get Score",
            VariableGet,
            "Get Score (/Script/BlueprintGraph.K2Node_VariableGet)",
            vec![P::output("Score", Integer).with_default("0")],
        ),
        NodeTemplate::new(
            "SetScore",
            "Set Score",
            VariableSet,
            "Set Score (/Script/BlueprintGraph.K2Node_VariableSet)",
            vec![
                P::input("execute", Exec),
                P::output("then", Exec),
                P::input("Score", Integer).with_default("0"),
                P::output("Output Get", Integer).with_default("0"),
            ],
        ),
    ]
}
